//! Tests for service-layer behavior that spans the snapshot channel.

mod champion;
