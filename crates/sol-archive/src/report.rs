/// Summary of one extraction call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractReport {
    pub directories: usize,
    pub files: usize,
    pub symlinks: usize,
    pub bytes_written: u64,
}

impl ExtractReport {
    pub fn entry_count(&self) -> usize {
        self.directories + self.files + self.symlinks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_count_sums_kinds() {
        let report = ExtractReport {
            directories: 2,
            files: 5,
            symlinks: 1,
            bytes_written: 1024,
        };
        assert_eq!(report.entry_count(), 8);
    }
}
