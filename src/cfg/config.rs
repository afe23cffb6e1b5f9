// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Top-level process configuration, loaded once at startup from a YAML file.
///
/// Field groups mirror the configuration surface `spec.md` §6 lists:
/// Diameter destination, HSS behavior, cache TTLs, realm-manager limits, and
/// the two listen addresses (HTTP in, HSS Diameter conf out).
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    /// Diameter destination and HSS-reachability parameters.
    pub diameter: DiameterConfig,
    /// Cache TTL and timing parameters.
    pub cache: CacheConfig,
    /// Realm manager / peer resolution parameters.
    pub realm: RealmConfig,
    /// HTTP frontend bind address.
    pub http: HttpConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DiameterConfig {
    /// `Destination-Realm` AVP sent on every Cx request.
    #[serde(rename = "DestRealm")]
    pub dest_realm: String,

    /// `Destination-Host` AVP sent on every Cx request. Optional: if unset,
    /// only `Destination-Realm` routes the message.
    #[serde(default, rename = "DestHost")]
    pub dest_host: Option<String>,

    /// The S-CSCF name this node advertises when synthesizing responses
    /// without an HSS (`hss_configured = false`) and in MAR/SAR requests.
    #[serde(rename = "ServerName")]
    pub server_name: String,

    /// When `false`, the orchestrators never talk to the HSS: AV lookups
    /// synthesize digests locally and registration/location queries answer
    /// immediately with `server_name`.
    #[serde(rename = "HssConfigured")]
    pub hss_configured: bool,

    /// Path to the external Diameter stack's own configuration file
    /// (advertised identity, transport, TLS, etc. — opaque to this core).
    #[serde(rename = "DiameterConfFile")]
    pub diameter_conf_file: String,

    /// Default timeout for an outbound Cx transaction (`send`), per §5.
    #[serde(rename = "TransactionTimeoutMs", with = "serde_millis")]
    pub transaction_timeout: Duration,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CacheConfig {
    /// Contact points for the backing wide-column store.
    #[serde(rename = "ContactPoints")]
    pub contact_points: Vec<String>,

    /// `impi_av` row TTL, in seconds.
    #[serde(rename = "ImpuCacheTtl", with = "serde_secs")]
    pub impu_cache_ttl: Duration,

    /// Expected HSS re-registration interval. `impu_subscription` TTL is
    /// `2 * hss_reregistration_time` so one missed re-registration does not
    /// evict the row.
    #[serde(rename = "HssReregistrationTime", with = "serde_secs")]
    pub hss_reregistration_time: Duration,
}

impl CacheConfig {
    /// TTL applied to `impu_subscription` writes: twice the expected
    /// re-registration interval, per the data-model invariant in `spec.md` §3.
    pub fn subscription_ttl(&self) -> Duration {
        self.hss_reregistration_time * 2
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RealmConfig {
    /// Realm to resolve Diameter peers in.
    #[serde(rename = "Realm")]
    pub realm: String,

    /// Local Diameter identity (hostname) used when resolving peers.
    #[serde(rename = "Hostname")]
    pub hostname: String,

    /// Upper bound on simultaneously-managed peers.
    #[serde(rename = "MaxPeers")]
    pub max_peers: usize,

    /// Upper bound on the control loop's tick interval, regardless of the
    /// resolver-reported TTL: the loop ticks on `min(ttl, max_tick_interval)`
    /// so a long-lived TTL never stops `stop()` waking it promptly.
    #[serde(rename = "MaxTickIntervalSecs", with = "serde_secs")]
    pub max_tick_interval: Duration,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HttpConfig {
    /// Address the HTTP frontend listens on, e.g. `0.0.0.0:8888`.
    #[serde(rename = "BindAddress")]
    pub bind_address: String,

    /// Base URL of the downstream SIP router's HTTP API (used for the RTR
    /// deregister notification, §6).
    #[serde(rename = "SipRouterBaseUrl")]
    pub sip_router_base_url: String,
}

impl Config {
    /// Loads the configuration from YAML, validates it, and returns the
    /// ready-to-use value.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config file {:?}", path.as_ref()))?;
        let cfg: Config =
            serde_yaml::from_str(&s).context("failed to parse config YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates invariants that YAML deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.diameter.dest_realm.is_empty(),
            "DestRealm must not be empty"
        );
        ensure!(
            !self.diameter.server_name.is_empty(),
            "ServerName must not be empty"
        );
        ensure!(self.realm.max_peers >= 1, "MaxPeers must be >= 1");
        ensure!(
            !self.cache.contact_points.is_empty(),
            "ContactPoints must not be empty"
        );
        Ok(())
    }

    /// A fully-populated config for use by other modules' test fixtures,
    /// in this crate and in `tests/`.
    pub fn sample() -> Config {
        Config {
            diameter: DiameterConfig {
                dest_realm: "ims.example.com".to_string(),
                dest_host: None,
                server_name: "scscf1.ims.example.com".to_string(),
                hss_configured: true,
                diameter_conf_file: "diameter.conf".to_string(),
                transaction_timeout: Duration::from_millis(200),
            },
            cache: CacheConfig {
                contact_points: vec!["127.0.0.1".to_string()],
                impu_cache_ttl: Duration::from_secs(7200),
                hss_reregistration_time: Duration::from_secs(300),
            },
            realm: RealmConfig {
                realm: "hss.example.com".to_string(),
                hostname: "homestead1.example.com".to_string(),
                max_peers: 2,
                max_tick_interval: Duration::from_secs(30),
            },
            http: HttpConfig {
                bind_address: "0.0.0.0:8888".to_string(),
                sip_router_base_url: "http://sprout.example.com:9888".to_string(),
            },
        }
    }
}

/// Serde helper for representing `Duration` as a number of seconds.
mod serde_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(d)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Serde helper for representing `Duration` as a number of milliseconds.
mod serde_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = u64::deserialize(d)?;
        Ok(Duration::from_millis(ms))
    }
}
