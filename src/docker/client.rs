//! Docker CLI client
//!
//! Shells out to the docker binary with `--format '{{json .}}'` and parses
//! one JSON object per output line.

use bytesize::ByteSize;
use serde::Deserialize;
use tokio::process::Command;

use crate::core::metrics::Metrics;
use crate::error::{CtopError, Result};

const JSON_FORMAT: &str = "{{json .}}";

/// A container as listed by `docker ps`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Short container id
    pub id: String,
    /// Container names, in the order docker reports them
    pub names: Vec<String>,
}

/// A single `docker stats` sample
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStats {
    pub id: String,
    pub cpu_percent: f64,
    pub mem_usage: u64,
    pub mem_limit: u64,
    pub net_rx: u64,
    pub net_tx: u64,
}

impl ContainerStats {
    /// Convert into a metrics sample keyed by container id
    pub fn into_metrics(self) -> (String, Metrics) {
        let metrics = Metrics {
            cpu_percent: self.cpu_percent,
            mem_usage: self.mem_usage,
            mem_limit: self.mem_limit,
            net_rx: self.net_rx,
            net_tx: self.net_tx,
        };
        (self.id, metrics)
    }
}

#[derive(Debug, Deserialize)]
struct PsRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Names", default)]
    names: String,
}

#[derive(Debug, Deserialize)]
struct StatsRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "CPUPerc", default)]
    cpu_perc: String,
    #[serde(rename = "MemUsage", default)]
    mem_usage: String,
    #[serde(rename = "NetIO", default)]
    net_io: String,
}

/// Thin async wrapper around the docker command line
#[derive(Debug, Clone)]
pub struct DockerCli {
    bin: String,
}

impl DockerCli {
    /// Create a client that invokes `bin`
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    /// List containers; `all` includes stopped ones
    pub async fn list_containers(&self, all: bool) -> Result<Vec<ContainerInfo>> {
        let mut args = vec!["ps", "--format", JSON_FORMAT];
        if all {
            args.push("--all");
        }
        let output = self.run(&args).await?;
        parse_ps(&output)
    }

    /// Take one stats sample of every running container
    pub async fn stats(&self) -> Result<Vec<ContainerStats>> {
        let output = self
            .run(&["stats", "--no-stream", "--format", JSON_FORMAT])
            .await?;
        parse_stats(&output)
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(bin = %self.bin, ?args, "invoking docker");

        let output = Command::new(&self.bin)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| CtopError::Docker(format!("cannot run '{}': {}", self.bin, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CtopError::Docker(format!(
                "'{} {}' exited with {}: {}",
                self.bin,
                args.first().copied().unwrap_or_default(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parse `docker ps --format '{{json .}}'` output
pub fn parse_ps(output: &str) -> Result<Vec<ContainerInfo>> {
    json_lines(output)
        .map(|line| -> Result<ContainerInfo> {
            let record: PsRecord = serde_json::from_str(line)?;
            Ok(ContainerInfo {
                id: record.id,
                names: record
                    .names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect(),
            })
        })
        .collect()
}

/// Parse `docker stats --no-stream --format '{{json .}}'` output
///
/// Individual fields that cannot be parsed (docker prints `--` for stopped
/// containers) read as zero.
pub fn parse_stats(output: &str) -> Result<Vec<ContainerStats>> {
    json_lines(output)
        .map(|line| -> Result<ContainerStats> {
            let record: StatsRecord = serde_json::from_str(line)?;
            let (mem_usage, mem_limit) = parse_pair(&record.mem_usage);
            let (net_rx, net_tx) = parse_pair(&record.net_io);
            Ok(ContainerStats {
                id: record.id,
                cpu_percent: parse_percent(&record.cpu_perc),
                mem_usage,
                mem_limit,
                net_rx,
                net_tx,
            })
        })
        .collect()
}

fn json_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn parse_percent(value: &str) -> f64 {
    value.trim().trim_end_matches('%').parse().unwrap_or(0.0)
}

/// Parse "1.5MiB / 2GiB" style pairs
fn parse_pair(value: &str) -> (u64, u64) {
    let mut parts = value.split('/');
    (parse_bytes(parts.next()), parse_bytes(parts.next()))
}

fn parse_bytes(value: Option<&str>) -> u64 {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<ByteSize>().ok())
        .map(|size| size.0)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ps_lines() {
        let output = r#"
{"ID":"b2c3d4e5f6a1","Names":"web","State":"running","Image":"nginx"}

{"ID":"a1b2c3d4e5f6","Names":"db, postgres","State":"exited"}
"#;
        let containers = parse_ps(output).unwrap();
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].id, "b2c3d4e5f6a1");
        assert_eq!(containers[0].names, vec!["web"]);
        assert_eq!(containers[1].names, vec!["db", "postgres"]);
    }

    #[test]
    fn test_parse_ps_empty_output() {
        assert!(parse_ps("").unwrap().is_empty());
        assert!(parse_ps("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ps_missing_names() {
        let containers = parse_ps(r#"{"ID":"abc"}"#).unwrap();
        assert!(containers[0].names.is_empty());
    }

    #[test]
    fn test_parse_ps_rejects_garbage() {
        let err = parse_ps("Cannot connect to the Docker daemon").unwrap_err();
        assert!(matches!(err, CtopError::Json(_)));
    }

    #[test]
    fn test_parse_stats_units() {
        let output = r#"{"ID":"abc","CPUPerc":"12.50%","MemUsage":"1.5MiB / 2GiB","NetIO":"2kB / 648B"}"#;
        let stats = parse_stats(output).unwrap();
        assert_eq!(stats.len(), 1);

        let s = &stats[0];
        assert_eq!(s.id, "abc");
        assert_eq!(s.cpu_percent, 12.5);
        assert_eq!(s.mem_usage, 1_572_864);
        assert_eq!(s.mem_limit, 2 * 1024 * 1024 * 1024);
        assert_eq!(s.net_rx, 2_000);
        assert_eq!(s.net_tx, 648);
    }

    #[test]
    fn test_parse_stats_placeholders_read_as_zero() {
        let output = r#"{"ID":"abc","CPUPerc":"--","MemUsage":"-- / --","NetIO":"--"}"#;
        let s = &parse_stats(output).unwrap()[0];
        assert_eq!(s.cpu_percent, 0.0);
        assert_eq!((s.mem_usage, s.mem_limit), (0, 0));
        assert_eq!((s.net_rx, s.net_tx), (0, 0));
    }

    #[test]
    fn test_into_metrics_keeps_id() {
        let stats = ContainerStats {
            id: "abc".into(),
            cpu_percent: 1.0,
            mem_usage: 2,
            mem_limit: 3,
            net_rx: 4,
            net_tx: 5,
        };
        let (id, metrics) = stats.into_metrics();
        assert_eq!(id, "abc");
        assert_eq!(metrics.mem_limit, 3);
        assert_eq!(metrics.net_tx, 5);
    }

    #[tokio::test]
    async fn test_missing_binary_is_docker_error() {
        let docker = DockerCli::new("/nonexistent/ctop-docker-binary");
        let err = docker.list_containers(false).await.unwrap_err();
        assert!(matches!(err, CtopError::Docker(_)));
    }
}
