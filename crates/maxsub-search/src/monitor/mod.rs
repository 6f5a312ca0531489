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

//! # Scan Monitors
//!
//! Pluggable observers of the scan lifecycle. Monitors can log progress,
//! record the trail of best-so-far subarrays, or be combined, without
//! entangling these concerns with the scan loop.
//!
//! ## Submodules
//!
//! - `scan_monitor`: the `ScanMonitor<T>` trait with its lifecycle hooks.
//! - `no_op`: a monitor that ignores every event.
//! - `log`: structured `tracing` output of scan events.
//! - `recording`: keeps every best-so-far subarray in discovery order.
//! - `composite`: forwards events to several monitors.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod recording;
pub mod scan_monitor;
