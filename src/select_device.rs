use crate::error::InitProcessError;
use pnet::datalink::{self, NetworkInterface};
use std::io::{self, Write};

// 名前が指定されていればそのデバイス、なければ対話的に選択する
pub fn select_device(name: Option<&str>) -> Result<NetworkInterface, InitProcessError> {
    let interfaces = datalink::interfaces();

    if let Some(name) = name {
        return interfaces
            .into_iter()
            .find(|interface| interface.name == name)
            .ok_or_else(|| {
                InitProcessError::DeviceSelectionError(format!("デバイスが見つかりません: {}", name))
            });
    }

    println!("利用可能なデバイス:");
    for (index, interface) in interfaces.iter().enumerate() {
        println!("{}. {}", index + 1, interface.name);
    }

    print!("キャプチャするデバイスの番号を入力してください: ");
    io::stdout()
        .flush()
        .map_err(|e| InitProcessError::DeviceSelectionError(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| InitProcessError::DeviceSelectionError(e.to_string()))?;
    let device_index: usize = input
        .trim()
        .parse()
        .map_err(|_| InitProcessError::DeviceSelectionError("無効なデバイス番号です".to_string()))?;

    if device_index == 0 || device_index > interfaces.len() {
        return Err(InitProcessError::DeviceSelectionError(
            "無効なデバイス番号です".to_string(),
        ));
    }

    Ok(interfaces[device_index - 1].clone())
}
