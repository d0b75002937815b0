use std::collections::HashMap;

lazy_static::lazy_static! {
    // IANAプロトコル番号のうち表示に使う分だけ
    static ref PROTOCOL_NAMES: HashMap<u8, &'static str> = {
        let mut names = HashMap::new();
        names.insert(1, "ICMP");
        names.insert(6, "TCP");
        names.insert(17, "UDP");
        names
    };
}

pub fn protocol_name(protocol: u8) -> String {
    match PROTOCOL_NAMES.get(&protocol) {
        Some(name) => (*name).to_string(),
        None => format!("protocol {:02x}", protocol),
    }
}
