use thiserror::Error;
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("IPv4ヘッダは最低{need}バイト必要ですが、{have}バイトしかありません")]
    InsufficientData { have: usize, need: usize },

    #[error("IPv4ヘッダを期待しましたが、IPv{got}でした")]
    UnsupportedVersion { got: u8 },

    #[error("ヘッダ長として{declared}バイトが宣言されていますが、{have}バイトしかありません")]
    TruncatedHeader { declared: usize, have: usize },
}

#[derive(Error, Debug)]
pub enum InitProcessError {
    #[error("ロガーのセットアップに失敗しました: {0}")]
    LoggerError(String),

    #[error("環境変数の解析に失敗しました: {0}")]
    EnvVarParseError(String),

    #[error("デバイスの選択に失敗しました: {0}")]
    DeviceSelectionError(String),

    #[error("キャプチャエラー: {0}")]
    CaptureError(#[from] std::io::Error),
}
