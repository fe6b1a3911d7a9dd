use super::*;
use crate::args::ProbeArgs;
use clap::Parser;
use std::future::Future;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener};
use std::thread;
use std::time::Duration;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn test_settings() -> ClientSettings {
    ClientSettings {
        request_timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
        redirect_limit: 0,
        user_agent: None,
    }
}

/// Serves `connections` requests with the given status line, then exits.
fn spawn_status_server(status_line: &'static str, connections: usize) -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;

    thread::spawn(move || {
        for stream in listener.incoming().take(connections) {
            let Ok(mut stream) = stream else {
                break;
            };
            let mut buffer = [0u8; 1024];
            if stream.read(&mut buffer).is_err() {
                continue;
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
                status_line
            );
            if stream.write_all(response.as_bytes()).is_err() {
                continue;
            }
            drop(stream.flush());
            drop(stream.shutdown(Shutdown::Both));
        }
    });

    Ok(format!("http://{}", addr))
}

fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

#[test]
fn client_settings_from_args() -> Result<(), String> {
    let args = ProbeArgs::try_parse_from([
        "sites-checker",
        "-H",
        "https://example.com",
        "--timeout",
        "3s",
        "--connect-timeout",
        "500ms",
        "--redirect",
        "2",
        "--no-ua",
    ])
    .map_err(|err| format!("parse failed: {}", err))?;

    let settings = ClientSettings::from_args(&args);
    let expected = ClientSettings {
        request_timeout: Duration::from_secs(3),
        connect_timeout: Duration::from_millis(500),
        redirect_limit: 2,
        user_agent: None,
    };
    if settings != expected {
        return Err(format!("Unexpected settings: {:?}", settings));
    }
    Ok(())
}

#[test]
fn client_settings_default_user_agent() -> Result<(), String> {
    let args = ProbeArgs::try_parse_from(["sites-checker", "-H", "https://example.com"])
        .map_err(|err| format!("parse failed: {}", err))?;
    let settings = ClientSettings::from_args(&args);
    match settings.user_agent {
        Some(agent) if agent.starts_with("sites-checker/") => Ok(()),
        other => Err(format!("Unexpected user agent: {:?}", other)),
    }
}

#[test]
fn build_client_succeeds_with_redirects() -> Result<(), String> {
    let mut settings = test_settings();
    settings.redirect_limit = 5;
    settings.user_agent = Some("sites-checker/test");
    build_client(&settings).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn status_classification() -> Result<(), String> {
    run_async_test(async {
        let now = tokio::time::Instant::now();
        for (status, expected) in [
            (200, true),
            (204, true),
            (301, true),
            (399, true),
            (199, false),
            (400, false),
            (404, false),
            (500, false),
            (503, false),
        ] {
            let response = TransportResponse {
                status,
                received_at: now,
            };
            if response.is_success() != expected {
                return Err(format!("Unexpected classification for {}", status));
            }
        }
        Ok(())
    })
}

#[test]
fn reqwest_transport_reports_status() -> Result<(), String> {
    run_async_test(async {
        let ok_url = spawn_status_server("200 OK", 1)?;
        let missing_url = spawn_status_server("404 Not Found", 1)?;
        let client = build_client(&test_settings()).map_err(|err| err.to_string())?;
        let transport = ReqwestTransport::new(client);

        let ok = transport
            .get(&ok_url)
            .await
            .map_err(|err| format!("Expected response, got {}", err))?;
        if ok.status != 200 || !ok.is_success() {
            return Err(format!("Unexpected status {}", ok.status));
        }

        let missing = transport
            .get(&missing_url)
            .await
            .map_err(|err| format!("Expected response, got {}", err))?;
        if missing.status != 404 || missing.is_success() {
            return Err(format!("Unexpected status {}", missing.status));
        }
        Ok(())
    })
}

#[test]
fn reqwest_transport_maps_refused_connection() -> Result<(), String> {
    run_async_test(async {
        let url = closed_port_url()?;
        let client = build_client(&test_settings()).map_err(|err| err.to_string())?;
        let transport = ReqwestTransport::new(client);

        match transport.get(&url).await {
            Ok(response) => Err(format!("Expected error, got {}", response.status)),
            Err(err) if err.kind == TransportErrorKind::Connect => Ok(()),
            Err(err) => Err(format!("Unexpected error kind: {}", err)),
        }
    })
}

#[test]
fn transport_error_display_names_kind() -> Result<(), String> {
    let err = TransportError {
        kind: TransportErrorKind::Timeout,
        message: "operation timed out".to_owned(),
    };
    let rendered = err.to_string();
    if rendered != "timeout error: operation timed out" {
        return Err(format!("Unexpected display: {}", rendered));
    }
    Ok(())
}
