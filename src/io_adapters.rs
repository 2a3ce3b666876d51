use std::cell::RefCell;
use std::io::{Result as IoResult, Write};
use std::rc::Rc;

/// Memory-backed writer for capturing what the interpreter prints.
///
/// Clones share the same buffer: hand one clone to the [`crate::Interpreter`] and
/// keep another to read the output afterwards.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.borrow().clone()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }

    /// Drop the captured output.
    pub fn clear(&self) {
        self.buf.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let handle = SharedBuffer::new();
        let mut writer = handle.clone();
        write!(writer, "hello ").unwrap();
        writer.write_all(b"world").unwrap();

        assert_eq!(handle.contents(), b"hello world");
        assert_eq!(handle.to_string_lossy(), "hello world");

        handle.clear();
        assert!(writer.contents().is_empty());
    }
}
