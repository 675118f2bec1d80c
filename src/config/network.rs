pub struct ClientDefaults {
    pub base_url: &'static str,
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct ServerDefaults {
    pub bind_addr: &'static str,
}

pub struct NetworkConfig {
    pub client: ClientDefaults,
    pub server: ServerDefaults,
}

pub const NETWORK: NetworkConfig = NetworkConfig {
    client: ClientDefaults {
        base_url: "http://127.0.0.1:3000",
        timeout_ms: 5000,
        user_agent: concat!("smm-stats/", env!("CARGO_PKG_VERSION")),
    },
    server: ServerDefaults {
        bind_addr: "127.0.0.1:3000",
    },
};
