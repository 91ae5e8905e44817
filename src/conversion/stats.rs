//! Statistics tracking for conversion runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregated statistics for one or more conversion operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Input JSON size in bytes
    pub input_size_bytes: u64,
    /// Rendered output size in bytes
    pub output_size_bytes: u64,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
    /// Number of conversion operations
    pub operation_count: usize,
    /// Average time per operation
    pub avg_time_per_operation_ms: f32,
    /// Throughput (input bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Output size as a percentage of input size
    pub size_ratio_percent: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            processing_time_ms: 0,
            file_count: 0,
            operation_count: 0,
            avg_time_per_operation_ms: 0.0,
            throughput_bytes_per_sec: 0.0,
            size_ratio_percent: 0.0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single conversion
    pub fn for_conversion(input_size: u64, output_size: u64, processing_time: Duration) -> Self {
        let mut stats = Self {
            input_size_bytes: input_size,
            output_size_bytes: output_size,
            processing_time_ms: processing_time.as_millis() as u64,
            file_count: 1,
            operation_count: 1,
            ..Self::default()
        };
        stats.recalculate();
        stats
    }

    /// Combine statistics from multiple operations
    pub fn combine(&mut self, other: &Self) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.processing_time_ms += other.processing_time_ms;
        self.file_count += other.file_count;
        self.operation_count += other.operation_count;
        self.recalculate();
        self.collected_at = chrono::Utc::now();
    }

    fn recalculate(&mut self) {
        self.avg_time_per_operation_ms = if self.operation_count > 0 {
            self.processing_time_ms as f32 / self.operation_count as f32
        } else {
            0.0
        };

        self.throughput_bytes_per_sec = if self.processing_time_ms > 0 {
            self.input_size_bytes as f32 / (self.processing_time_ms as f32 / 1000.0)
        } else {
            0.0
        };

        self.size_ratio_percent = if self.input_size_bytes > 0 {
            (self.output_size_bytes as f32 / self.input_size_bytes as f32) * 100.0
        } else {
            0.0
        };
    }

    /// Multi-line text summary for console output
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push("Conversion statistics:".to_string());
        lines.push(format!("  Files processed:  {}", self.file_count));
        lines.push(format!(
            "  Input size:       {}",
            format_file_size(self.input_size_bytes)
        ));
        lines.push(format!(
            "  Output size:      {} ({:.1}% of input)",
            format_file_size(self.output_size_bytes),
            self.size_ratio_percent
        ));
        lines.push(format!(
            "  Processing time:  {}ms (avg {:.1}ms/op)",
            self.processing_time_ms, self.avg_time_per_operation_ms
        ));
        lines.push(format!(
            "  Collected at:     {}",
            self.collected_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        lines.join("\n")
    }
}

/// Render a byte count in human-readable units
pub fn format_file_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = size as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
