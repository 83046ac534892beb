use file_adapters::prelude::*;

/// Mock OutputPresenter that keeps every presented line
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub lines: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Everything presented so far, as it would appear on stdout
    pub fn output(&self) -> String {
        self.get_lines()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present_line(&self, line: &str) -> Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
