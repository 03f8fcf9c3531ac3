#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use mockito::{Mock, ServerGuard};
use user_manager::{HomeScreen, UserClient};

pub const TWO_USERS: &str = r#"{"users": [
    {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com"},
    {"id": 2, "name": "Grace Hopper", "email": "grace@example.com"}
]}"#;

pub const ONLY_GRACE: &str = r#"{"users": [
    {"id": 2, "name": "Grace Hopper", "email": "grace@example.com"}
]}"#;

pub const NO_USERS: &str = r#"{"users": []}"#;

pub fn client(url: &str) -> UserClient {
    UserClient::new(url, Duration::from_secs(5)).unwrap()
}

pub fn screen(url: &str) -> HomeScreen {
    HomeScreen::new(client(url), false)
}

/// A URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Answers exactly one request with `200` and `body`, then stops
/// listening. Once the handle is joined, every further connection to the
/// returned URL is refused.
pub fn serve_once(body: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }

        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
    });

    (url, handle)
}

pub async fn mock_health(server: &mut ServerGuard, status: usize) -> Mock {
    server
        .mock("GET", "/")
        .with_status(status)
        .with_body("ok")
        .expect(1)
        .create_async()
        .await
}

pub async fn mock_list(server: &mut ServerGuard, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", "/api/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}
