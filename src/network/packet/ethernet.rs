pub const ETHERTYPE_IPV4: u16 = 0x0800;

const ETHERNET_HEADER_LENGTH: usize = 14;

#[derive(Debug, Clone)]
pub struct EthernetHeader {
    pub destination: [u8; 6],
    pub source: [u8; 6],
    pub ethertype: u16,
}

impl EthernetHeader {
    // 短すぎるフレームはエラーではなく読み飛ばす対象
    pub fn parse(data: &[u8]) -> Option<(Self, &[u8])> {
        if data.len() < ETHERNET_HEADER_LENGTH {
            return None;
        }

        let mut destination = [0u8; 6];
        let mut source = [0u8; 6];
        destination.copy_from_slice(&data[0..6]);
        source.copy_from_slice(&data[6..12]);
        let ethertype = u16::from_be_bytes([data[12], data[13]]);

        Some((
            Self {
                destination,
                source,
                ethertype,
            },
            &data[ETHERNET_HEADER_LENGTH..],
        ))
    }

    pub fn is_ipv4(&self) -> bool {
        self.ethertype == ETHERTYPE_IPV4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_frame() {
        let mut frame = vec![0u8; 14];
        frame[0..6].copy_from_slice(&[0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]);
        frame[6..12].copy_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        frame[12..14].copy_from_slice(&ETHERTYPE_IPV4.to_be_bytes());
        frame.push(0x45);

        let (header, remainder) = EthernetHeader::parse(&frame).unwrap();
        assert_eq!(header.destination, [0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]);
        assert_eq!(header.source, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert!(header.is_ipv4());
        assert_eq!(remainder, &[0x45]);
    }

    #[test]
    fn test_short_frame_is_skipped() {
        let frame = [0u8; 10];
        assert!(EthernetHeader::parse(&frame).is_none());
    }

    #[test]
    fn test_non_ipv4_ethertype() {
        let mut frame = [0u8; 14];
        // ARP
        frame[12..14].copy_from_slice(&0x0806u16.to_be_bytes());
        let (header, _) = EthernetHeader::parse(&frame).unwrap();
        assert!(!header.is_ipv4());
    }
}
