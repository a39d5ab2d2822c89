// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). The contest site still answers
// plain HTTP, so no TLS machinery in the tree. No redirects, no retry:
// a failed fetch fails the run.

use std::{
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use crate::error::RankError;

const TIMEOUT: Duration = Duration::from_secs(15);

pub fn http_get(host: &str, port: u16, path_and_query: &str) -> Result<String, RankError> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(TIMEOUT))?;
    s.set_write_timeout(Some(TIMEOUT))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: cg_rank/0.2\r\nConnection: close\r\n\r\n",
        path_and_query, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(RankError::Http(format!(
            "{} for {}{}",
            status, host, path_and_query
        )));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| RankError::Http(s!("malformed response: no header terminator")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}
