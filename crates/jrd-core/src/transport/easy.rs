//! libcurl-backed [`Transport`].

use std::cell::Cell;
use std::path::Path;

use curl::easy::Easy;

use super::status::parse_status_line;
use super::{HttpOptions, Transport};
use crate::retry::{run_with_retry, TransportError};
use crate::storage::{self, AppendSink};

const USER_AGENT: &str = concat!("jrd/", env!("CARGO_PKG_VERSION"));

/// Transport built on curl `Easy` handles. One handle per request; the
/// struct itself is read-only configuration and is safe to share.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    opts: HttpOptions,
}

impl CurlTransport {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }

    fn easy(&self, url: &str, follow_redirects: bool) -> Result<Easy, TransportError> {
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(follow_redirects)?;
        if follow_redirects {
            easy.max_redirections(10)?;
        }
        easy.useragent(USER_AGENT)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.timeout(self.opts.timeout)?;
        Ok(easy)
    }

    fn status_once(&self, url: &str) -> Result<u32, TransportError> {
        let mut easy = self.easy(url, false)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }
        match easy.response_code()? {
            200 => Ok(200),
            code => Err(TransportError::Status(code)),
        }
    }

    fn json_once(&self, url: &str) -> Result<serde_json::Value, TransportError> {
        let mut body = Vec::new();
        let mut easy = self.easy(url, true)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let code = easy.response_code()?;
        if code != 200 {
            return Err(TransportError::Status(code));
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// One GET into `dest`. Sets `touched` once `dest` has been truncated by this attempt.
    fn file_once(
        &self,
        url: &str,
        dest: &Path,
        touched: &Cell<bool>,
    ) -> Result<u64, TransportError> {
        let status = Cell::new(0u32);
        let mut sink: Option<AppendSink> = None;
        let mut write_err: Option<std::io::Error> = None;
        let mut easy = self.easy(url, true)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|line| {
                if let Some(code) = parse_status_line(line) {
                    status.set(code);
                }
                true
            })?;
            transfer.write_function(|data| {
                // Bodies of redirects and error pages are not part of the artifact.
                if status.get() != 200 {
                    return Ok(data.len());
                }
                if sink.is_none() {
                    touched.set(true);
                    match AppendSink::create(dest) {
                        Ok(s) => sink = Some(s),
                        Err(e) => {
                            write_err = Some(e);
                            return Ok(0); // abort transfer
                        }
                    }
                }
                if let Some(s) = sink.as_mut() {
                    if let Err(e) = s.append(data) {
                        write_err = Some(e);
                        return Ok(0);
                    }
                }
                Ok(data.len())
            })?;
            transfer.perform()
        };

        if let Some(e) = write_err {
            return Err(TransportError::Storage(e));
        }
        performed?;

        let code = easy.response_code()?;
        if code != 200 {
            return Err(TransportError::Status(code));
        }
        let sink = match sink {
            Some(s) => s,
            // 200 with an empty body still produces the file.
            None => {
                touched.set(true);
                AppendSink::create(dest)?
            }
        };
        let path = sink.path().display().to_string();
        let written = sink.finish()?;
        tracing::debug!("wrote {} bytes to {}", written, path);
        Ok(written)
    }
}

impl Transport for CurlTransport {
    fn get_status(&self, url: &str) -> Result<u32, TransportError> {
        match run_with_retry(&self.opts.retry, url, || self.status_once(url)) {
            Ok(code) => Ok(code),
            Err(TransportError::Status(code)) => Ok(code),
            Err(e) => Err(e),
        }
    }

    fn get_json(&self, url: &str) -> Result<serde_json::Value, TransportError> {
        run_with_retry(&self.opts.retry, url, || self.json_once(url))
    }

    fn get_to_file(&self, url: &str, dest: &Path) -> Result<u64, TransportError> {
        // A prior file this call never opened is left as it was.
        let touched = Cell::new(false);
        let result = run_with_retry(&self.opts.retry, url, || {
            self.file_once(url, dest, &touched)
        });
        if result.is_err() && touched.get() {
            storage::discard_partial(dest);
        }
        result
    }
}
