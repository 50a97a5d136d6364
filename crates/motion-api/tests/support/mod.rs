//! One-shot HTTP stub server for client tests.
//!
//! Serves a fixed list of canned responses, one per connection, and
//! records each request it receives.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde_json::Value;

const ACCEPT_DEADLINE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

pub struct StubServer {
    addr: SocketAddr,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl StubServer {
    /// Starts a server answering with `responses` (status, body) in order.
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("local addr");
        listener.set_nonblocking(true).expect("nonblocking listener");

        let handle = std::thread::spawn(move || {
            let mut recorded = Vec::new();
            let deadline = Instant::now() + ACCEPT_DEADLINE;
            for (status, body) in responses {
                let Some(stream) = accept_until(&listener, deadline) else {
                    break;
                };
                recorded.push(serve(stream, status, &body));
            }
            recorded
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Waits for the server thread and returns the recorded requests.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("stub server thread")
    }
}

/// Accepts one connection and never answers it.
pub struct HungServer {
    addr: SocketAddr,
    release: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl HungServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind hung server");
        let addr = listener.local_addr().expect("local addr");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let (release, released) = mpsc::channel::<()>();

        let handle = std::thread::spawn(move || {
            let deadline = Instant::now() + ACCEPT_DEADLINE;
            if let Some(stream) = accept_until(&listener, deadline) {
                // Holds the connection open until the test is done with it.
                let _ = released.recv_timeout(ACCEPT_DEADLINE);
                drop(stream);
            }
        });

        Self {
            addr,
            release: Some(release),
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for HungServer {
    fn drop(&mut self) {
        drop(self.release.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Returns a base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn accept_until(listener: &TcpListener, deadline: Instant) -> Option<TcpStream> {
    loop {
        match listener.accept() {
            Ok((stream, _)) => {
                stream.set_nonblocking(false).expect("blocking stream");
                return Some(stream);
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                if Instant::now() >= deadline {
                    return None;
                }
                std::thread::sleep(Duration::from_millis(5));
            }
            Err(e) => panic!("accept failed: {e}"),
        }
    }
}

fn serve(stream: TcpStream, status: u16, body: &str) -> RecordedRequest {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("read timeout");
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut buf = vec![0u8; length];
    reader.read_exact(&mut buf).expect("request body");

    let response = format!(
        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = stream;
    stream.write_all(response.as_bytes()).expect("write response");
    stream.flush().expect("flush response");

    RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8(buf).expect("utf-8 body"),
    }
}
