use dotenv::dotenv;
use ipv4_inspector::config::{AppConfig, OutputFormat};
use ipv4_inspector::error::InitProcessError;
use ipv4_inspector::network::packet::IPv4Header;
use ipv4_inspector::network::PacketCapture;
use ipv4_inspector::select_device::select_device;
use ipv4_inspector::setup_logger::setup_logger;
use ipv4_inspector::summary::HeaderSummary;
use log::error;

// 動作確認用のサンプルヘッダ(16進文字列)
const SAMPLE_HEADERS: &[&str] = &[
    // マルチキャスト宛のUDP
    "45000097b55f000004119e52c0000206effffffa",
    // フラグメント禁止のTCP(TLS)パケット
    "450000aea00d4000360679d5c000021ac000020a",
    // 通常のICMPエコー要求(ping)
    "450000548cfa400040012a98c000020a08080808",
    // 2000バイトペイロードのping、フラグメント化済み
    "450005dc22dc20004001af2ec000020a08080808",
    "4500022423da00b94001d12fc000020a08080808",
];

fn main() -> Result<(), InitProcessError> {
    dotenv().ok();
    setup_logger().map_err(|e| InitProcessError::LoggerError(e.to_string()))?;

    let config = AppConfig::from_env()?;
    let format = config.output.format;

    if config.capture.enabled {
        // ライブキャプチャモード
        let interface = select_device(config.capture.interface.as_deref())?;
        println!("デバイスの選択に成功しました: {}", interface.name);

        let capture = PacketCapture::new(interface);
        capture.run(|header| report_header(header, format))?;
    } else {
        // サンプルヘッダの表示モード
        for sample in SAMPLE_HEADERS {
            match hex::decode(sample) {
                Ok(data) => match IPv4Header::parse(&data) {
                    Ok(header) => report_header(&header, format),
                    Err(e) => error!("サンプルヘッダの解析に失敗しました: {}", e),
                },
                Err(e) => error!("サンプルヘッダのデコードに失敗しました: {}", e),
            }
        }
    }

    Ok(())
}

fn report_header(header: &IPv4Header, format: OutputFormat) {
    let summary = HeaderSummary::from_header(header);
    match format {
        OutputFormat::Text => {
            println!("{}", summary.render_text());
            println!();
        }
        OutputFormat::Json => match summary.render_json() {
            Ok(json) => println!("{}", json),
            Err(e) => error!("サマリのJSON変換に失敗しました: {}", e),
        },
    }
}
