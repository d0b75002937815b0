use env_logger::{Builder, Target};
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

pub fn setup_logger() -> Result<(), SetLoggerError> {
    // ビルダーでロガーをカスタマイズ
    Builder::new()
        // ログレベルの設定
        .filter_level(LevelFilter::Info)
        // タイムスタンプ付きのフォーマット
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Stdout)
        .try_init()
}
