use crate::network::packet::{protocol_name, IPv4Header};
use serde::Serialize;

// デコード済みヘッダの表示用ビュー
// アドレスのドット表記への変換はここでのみ行う
#[derive(Debug, Serialize)]
pub struct HeaderSummary {
    pub total_length: u16,
    pub header_length: u16,
    pub payload_length: i32,
    pub protocol: String,
    pub source: String,
    pub destination: String,
    pub ttl: u8,
    pub fragment_offset: u16,
    pub more_fragments: bool,
    pub allows_fragmentation: bool,
}

impl HeaderSummary {
    pub fn from_header(header: &IPv4Header) -> Self {
        Self {
            total_length: header.total_length,
            header_length: header.header_length,
            payload_length: header.payload_length(),
            protocol: protocol_name(header.protocol),
            source: header.source.to_string(),
            destination: header.destination.to_string(),
            ttl: header.ttl,
            fragment_offset: header.fragment_offset,
            more_fragments: header.has_more_fragments(),
            allows_fragmentation: header.allows_fragmentation(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "{}バイト({}バイトヘッダ、{}バイトペイロード)の{}パケット: {} から {} へ",
            self.total_length,
            self.header_length,
            self.payload_length,
            self.protocol,
            self.source,
            self.destination
        ));
        if self.fragment_offset != 0 {
            lines.push(format!("  オフセット{}のフラグメント", self.fragment_offset));
            if self.more_fragments {
                lines.push("  後続のフラグメントがあります".to_string());
            } else {
                lines.push("  このパケットの最後のフラグメントです".to_string());
            }
        } else if self.more_fragments {
            lines.push("  先頭のフラグメントです、後続があります".to_string());
        } else {
            lines.push("  フラグメント化されていません".to_string());
        }
        if self.allows_fragmentation {
            lines.push("  フラグメント化は許可されています".to_string());
        } else {
            lines.push("  フラグメント化は許可されていません".to_string());
        }
        lines.push(format!("  TTL: {}", self.ttl));
        lines.join("\n")
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
