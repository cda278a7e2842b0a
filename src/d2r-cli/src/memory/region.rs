//! Memory Region Types
//!
//! Mappings parsed from /proc/pid/maps.

/// A memory region from /proc/pid/maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion {
    pub start: usize,
    pub end: usize,
    pub perms: String,
    pub path: Option<String>,
}

impl MemoryRegion {
    /// Parse one line of a maps file
    ///
    /// Lines without a well-formed address range yield `None`.
    /// Everything after the inode column is the path, spaces included.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut rest = line;
        let (start, end) = next_field(&mut rest)?.split_once('-')?;
        let start = usize::from_str_radix(start, 16).ok()?;
        let end = usize::from_str_radix(end, 16).ok()?;
        let perms = next_field(&mut rest).unwrap_or("").to_string();
        // offset, dev, inode
        for _ in 0..3 {
            next_field(&mut rest);
        }
        let path = Some(rest.trim())
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string());

        Some(MemoryRegion {
            start,
            end,
            perms,
            path,
        })
    }

    pub fn size(&self) -> usize {
        self.end - self.start
    }

    pub fn is_readable(&self) -> bool {
        self.perms.starts_with('r')
    }

    /// Whether the backing file name matches `module`, ignoring case
    pub fn is_module(&self, module: &str) -> bool {
        self.path
            .as_deref()
            .and_then(|p| p.rsplit(['/', '\\']).next())
            .is_some_and(|name| name.eq_ignore_ascii_case(module))
    }
}

/// Split off the next whitespace-delimited column
fn next_field<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        *rest = trimmed;
        return None;
    }
    let (field, tail) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    *rest = tail;
    Some(field)
}
