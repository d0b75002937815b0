use crate::error::{ProtocolError, Result};
use bytes::Bytes;
use std::net::Ipv4Addr;

// 0                   1                   2                   3
// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |Version|  IHL  |Type of Service|          Total Length         |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |         Identification        |Flags|      Fragment Offset    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  Time to Live |    Protocol   |         Header Checksum       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                       Source Address                          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                    Destination Address                        |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IPv4Header {
    pub version: u8,
    pub header_length: u16,
    pub dscp: u8,
    pub ecn: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags: FragmentFlags,
    pub fragment_offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    pub raw_header: Bytes,
}

// フラグ/オフセットフィールドの上位3ビット
pub const FLAG_EVIL: u8 = 0x04;
pub const FLAG_DONT_FRAGMENT: u8 = 0x02;
pub const FLAG_MORE_FRAGMENTS: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentFlags {
    pub evil: bool,
    pub dont_fragment: bool,
    pub more_fragments: bool,
}

impl FragmentFlags {
    pub fn from_bits(bits: u8) -> Self {
        Self {
            evil: bits & FLAG_EVIL == FLAG_EVIL,
            dont_fragment: bits & FLAG_DONT_FRAGMENT == FLAG_DONT_FRAGMENT,
            more_fragments: bits & FLAG_MORE_FRAGMENTS == FLAG_MORE_FRAGMENTS,
        }
    }
}

const MIN_HEADER_LENGTH: usize = 20;

impl IPv4Header {
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_HEADER_LENGTH {
            return Err(ProtocolError::InsufficientData {
                have: data.len(),
                need: MIN_HEADER_LENGTH,
            });
        }

        let version = (data[0] >> 4) & 0xf;
        if version != 4 {
            // 宣言されたヘッダ長を確認する前にバージョンを検証する
            return Err(ProtocolError::UnsupportedVersion { got: version });
        }

        // 32ビットワード数なので4倍してバイト数にする
        let header_length = ((data[0] & 0xf) as u16) * 4;
        let dscp = data[1] >> 2;
        let ecn = data[1] & 0x3;
        let total_length = u16::from_be_bytes([data[2], data[3]]);
        let identification = u16::from_be_bytes([data[4], data[5]]);

        // 先頭3ビットがフラグ、残り13ビットがオフセット(8バイト単位)
        let flags_fragment_offset = u16::from_be_bytes([data[6], data[7]]);
        let flags = FragmentFlags::from_bits((flags_fragment_offset >> 13) as u8);
        let fragment_offset = (flags_fragment_offset & 0x1fff) << 3;

        let ttl = data[8];
        let protocol = data[9];
        let checksum = u16::from_be_bytes([data[10], data[11]]);
        let source = Ipv4Addr::new(data[12], data[13], data[14], data[15]);
        let destination = Ipv4Addr::new(data[16], data[17], data[18], data[19]);

        if data.len() < header_length as usize {
            return Err(ProtocolError::TruncatedHeader {
                declared: header_length as usize,
                have: data.len(),
            });
        }

        // オプション検査用にヘッダ部分のコピーを保持する
        let raw_header = Bytes::copy_from_slice(&data[..header_length as usize]);

        Ok(Self {
            version,
            header_length,
            dscp,
            ecn,
            total_length,
            identification,
            flags,
            fragment_offset,
            ttl,
            protocol,
            checksum,
            source,
            destination,
            raw_header,
        })
    }

    // 宣言された全長がヘッダ長より小さい場合は負になる
    pub fn payload_length(&self) -> i32 {
        i32::from(self.total_length) - i32::from(self.header_length)
    }

    pub fn allows_fragmentation(&self) -> bool {
        !self.flags.dont_fragment
    }

    pub fn has_more_fragments(&self) -> bool {
        self.flags.more_fragments
    }

    // RFC 3514のセキュリティフラグ
    pub fn is_evil(&self) -> bool {
        self.flags.evil
    }
}
