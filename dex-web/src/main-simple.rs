//! Static file server for the built front-end
//!
//! Serves the trunk output in `dist/` on port 8080, with single-page-app
//! fallback to `index.html` so client-side routes deep-link correctly.
//! std-only on purpose: this binary exists for local development and demos.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let listener = match TcpListener::bind(ADDR) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("failed to bind {}: {}", ADDR, e);
            std::process::exit(1);
        }
    };

    println!("Ragnar DEX dev server running at http://{}", ADDR);
    println!("Serving from {}/", DIST_DIR);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split('?').next().unwrap_or("/");
    let file_path = resolve(path);

    let (status, body) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", body),
        Err(_) => ("404 Not Found", b"not found".to_vec()),
    };

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type(&file_path),
        body.len()
    );

    if stream.write_all(header.as_bytes()).is_ok() {
        stream.write_all(&body).ok();
    }
}

/// Map a request path to a file under dist/, falling back to index.html
/// for anything that is not an existing asset (client-side routing).
fn resolve(path: &str) -> PathBuf {
    let index = Path::new(DIST_DIR).join("index.html");
    if path == "/" || path.is_empty() {
        return index;
    }

    let candidate = Path::new(DIST_DIR).join(path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
