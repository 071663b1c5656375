//! Shared integration-test fixture: spawns the server on a local port.

#![allow(dead_code)]

use std::{path::PathBuf, time::Duration};

use roomcast::{ServerConfig, run_server};

pub struct TestServer {
    port: u16,
    pub message_path: PathBuf,
}

impl TestServer {
    /// Spawn the server on `port` and wait until it accepts connections.
    ///
    /// Each fixture writes its message file under the system temp dir so
    /// tests on different ports never share state.
    pub async fn start(port: u16) -> Self {
        let message_path =
            std::env::temp_dir().join(format!("roomcast-test-{port}-message.txt"));
        let config = ServerConfig {
            port,
            message_path: message_path.clone(),
        };
        tokio::spawn(async move {
            if let Err(e) = run_server(config).await {
                panic!("test server failed: {e}");
            }
        });

        for _ in 0..100 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port))
                .await
                .is_ok()
            {
                return Self { port, message_path };
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("test server did not start on port {port}");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}
