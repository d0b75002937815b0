use crate::error::InitProcessError;
use crate::network::packet::{EthernetHeader, IPv4Header};
use log::{debug, error, info};
use pnet::datalink::{self, Channel, NetworkInterface};

pub struct PacketCapture {
    interface: NetworkInterface,
}

impl PacketCapture {
    pub fn new(interface: NetworkInterface) -> Self {
        Self { interface }
    }

    // 不正なフレームは読み飛ばすだけで、ループは止めない
    pub fn run<F>(&self, mut report: F) -> Result<(), InitProcessError>
    where
        F: FnMut(&IPv4Header),
    {
        let (_, mut rx) = match datalink::channel(&self.interface, Default::default()) {
            Ok(Channel::Ethernet(tx, rx)) => (tx, rx),
            Ok(_) => {
                return Err(InitProcessError::CaptureError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "未サポートのチャネルタイプです",
                )))
            }
            Err(e) => return Err(InitProcessError::CaptureError(e)),
        };

        info!("{}でキャプチャを開始します", self.interface.name);

        loop {
            match rx.next() {
                Ok(frame) => self.process_frame(frame, &mut report),
                Err(e) => error!("パケットの読み取り中にエラーが発生しました: {}", e),
            }
        }
    }

    fn process_frame<F>(&self, data: &[u8], report: &mut F)
    where
        F: FnMut(&IPv4Header),
    {
        let (ethernet, remainder) = match EthernetHeader::parse(data) {
            Some(parsed) => parsed,
            None => {
                debug!("イーサネットヘッダに満たないフレームを読み飛ばしました");
                return;
            }
        };

        if !ethernet.is_ipv4() {
            debug!(
                "IPv4以外のフレームを読み飛ばしました: ethertype=0x{:04x}",
                ethernet.ethertype
            );
            return;
        }

        match IPv4Header::parse(remainder) {
            Ok(header) => report(&header),
            Err(e) => debug!("IPv4ヘッダの解析に失敗しました: {}", e),
        }
    }
}
