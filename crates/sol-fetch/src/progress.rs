use std::io::{self, Read};

/// `Read` adapter reporting cumulative bytes pulled through it.
///
/// The callback runs on every read, including zero-length ones at
/// end-of-stream, and receives the running total.
pub struct ProgressReader<R, F> {
    inner: R,
    read: u64,
    on_progress: F,
}

impl<R: Read, F: FnMut(u64)> ProgressReader<R, F> {
    pub fn new(inner: R, on_progress: F) -> Self {
        Self {
            inner,
            read: 0,
            on_progress,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.read
    }
}

impl<R: Read, F: FnMut(u64)> Read for ProgressReader<R, F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.read += n as u64;
        (self.on_progress)(self.read);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reports_running_total() {
        let mut seen = Vec::new();
        {
            let mut reader =
                ProgressReader::new(Cursor::new(vec![0u8; 100]), |total| seen.push(total));

            let mut buf = [0u8; 64];
            reader.read(&mut buf).unwrap();
            reader.read(&mut buf).unwrap();
            assert_eq!(reader.bytes_read(), 100);
        }
        assert_eq!(seen, vec![64, 100]);
    }

    #[test]
    fn counts_nothing_on_empty_stream() {
        let mut reader = ProgressReader::new(Cursor::new(Vec::<u8>::new()), |_| {});
        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
        assert_eq!(reader.bytes_read(), 0);
    }
}
