// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Statistics collected during a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStatistics {
    /// Number of elements visited.
    pub elements_scanned: u64,
    /// Number of times the running subarray was abandoned.
    pub resets: u64,
    /// Number of times the best-so-far subarray was replaced.
    pub improvements: u64,
    /// Wall-clock duration of the scan.
    pub scan_duration: std::time::Duration,
}

impl ScanStatistics {
    #[inline(always)]
    pub fn on_element(&mut self) {
        self.elements_scanned = self.elements_scanned.saturating_add(1);
    }

    #[inline(always)]
    pub fn on_reset(&mut self) {
        self.resets = self.resets.saturating_add(1);
    }

    #[inline(always)]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    #[inline(always)]
    pub fn set_scan_duration(&mut self, duration: std::time::Duration) {
        self.scan_duration = duration;
    }
}

impl std::fmt::Display for ScanStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scan Statistics:")?;
        writeln!(f, "  Elements Scanned: {}", self.elements_scanned)?;
        writeln!(f, "  Resets: {}", self.resets)?;
        writeln!(f, "  Improvements: {}", self.improvements)?;
        write!(
            f,
            "  Scan Duration (secs): {:.6}",
            self.scan_duration.as_secs_f64()
        )
    }
}

/// Builder for `ScanStatistics`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanStatisticsBuilder {
    stats: ScanStatistics,
}

impl ScanStatisticsBuilder {
    /// Creates a new `ScanStatisticsBuilder` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of elements scanned.
    #[inline]
    pub fn elements_scanned(mut self, elements_scanned: u64) -> Self {
        self.stats.elements_scanned = elements_scanned;
        self
    }

    /// Sets the number of resets.
    #[inline]
    pub fn resets(mut self, resets: u64) -> Self {
        self.stats.resets = resets;
        self
    }

    /// Sets the number of improvements.
    #[inline]
    pub fn improvements(mut self, improvements: u64) -> Self {
        self.stats.improvements = improvements;
        self
    }

    /// Sets the scan duration.
    #[inline]
    pub fn scan_duration(mut self, scan_duration: std::time::Duration) -> Self {
        self.stats.scan_duration = scan_duration;
        self
    }

    /// Builds the `ScanStatistics` instance.
    #[inline]
    pub fn build(self) -> ScanStatistics {
        self.stats
    }
}
