//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed routes by request path. Each route has a status, an optional
//! `Location`, a body, and an optional number of leading 503 answers so retry
//! behavior can be observed. Hits are counted per path.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u32,
    pub body: Vec<u8>,
    pub location: Option<String>,
    /// Answer 503 this many times before serving the route normally.
    pub fail_first: usize,
    /// Advertised `Content-Length` when it differs from the body (connection drops early).
    pub declared_len: Option<usize>,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            location: None,
            fail_first: 0,
            declared_len: None,
        }
    }

    pub fn status(status: u32) -> Self {
        Self {
            status,
            body: Vec::new(),
            location: None,
            fail_first: 0,
            declared_len: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            body: b"moved".to_vec(),
            location: Some(location.to_string()),
            fail_first: 0,
            declared_len: None,
        }
    }

    /// 200 that sends `body` but promises `declared_len` bytes, then closes.
    pub fn truncated(body: impl Into<Vec<u8>>, declared_len: usize) -> Self {
        Self {
            declared_len: Some(declared_len),
            ..Self::ok(body)
        }
    }

    pub fn flaky(mut self, fail_first: usize) -> Self {
        self.fail_first = fail_first;
        self
    }
}

pub struct FixtureServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl FixtureServer {
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> FixtureServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(HashMap::new()));
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    FixtureServer {
        base: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    hits: &Mutex<HashMap<String, usize>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let hit = {
        let mut hits = hits.lock().unwrap();
        let count = hits.entry(path.clone()).or_insert(0);
        *count += 1;
        *count
    };

    let (status, body, location, declared_len) = match routes.get(&path) {
        Some(route) if hit <= route.fail_first => (503, b"busy".to_vec(), None, None),
        Some(route) => (
            route.status,
            route.body.clone(),
            route.location.clone(),
            route.declared_len,
        ),
        None => (404, b"not found".to_vec(), None, None),
    };
    let location = location
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status,
        reason(status),
        declared_len.unwrap_or(body.len()),
        location
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}

fn reason(status: u32) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
