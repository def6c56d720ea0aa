//! The enriched event field table.
//!
//! An enriched event is 131 positional columns. The table maps each position
//! to its output name and [`ValueKind`], plus a name to position index used by
//! the accessors. It is built once and never mutated, so one instance can be
//! shared by any number of threads; [`FieldTable::global`] holds that
//! instance.
use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::value::ValueKind;

/// Number of columns in an enriched event.
pub const FIELD_COUNT: usize = 131;

/// Output name of the latitude column.
pub const GEO_LATITUDE: &str = "geo_latitude";

/// Output name of the longitude column.
pub const GEO_LONGITUDE: &str = "geo_longitude";

/// Name of the synthetic `"<lat>,<lon>"` field.
pub const GEO_LOCATION: &str = "geo_location";

/// Column layout of the enriched event format, in wire order.
pub static ENRICHED_EVENT_FIELDS: [(&str, ValueKind); FIELD_COUNT] = [
    ("app_id", ValueKind::String),
    ("platform", ValueKind::String),
    ("etl_tstamp", ValueKind::Timestamp),
    ("collector_tstamp", ValueKind::Timestamp),
    ("dvce_created_tstamp", ValueKind::Timestamp),
    ("event", ValueKind::String),
    ("event_id", ValueKind::String),
    ("txn_id", ValueKind::Integer),
    ("name_tracker", ValueKind::String),
    ("v_tracker", ValueKind::String),
    ("v_collector", ValueKind::String),
    ("v_etl", ValueKind::String),
    ("user_id", ValueKind::String),
    ("user_ipaddress", ValueKind::String),
    ("user_fingerprint", ValueKind::String),
    ("domain_userid", ValueKind::String),
    ("domain_sessionidx", ValueKind::Integer),
    ("network_userid", ValueKind::String),
    ("geo_country", ValueKind::String),
    ("geo_region", ValueKind::String),
    ("geo_city", ValueKind::String),
    ("geo_zipcode", ValueKind::String),
    ("geo_latitude", ValueKind::Double),
    ("geo_longitude", ValueKind::Double),
    ("geo_region_name", ValueKind::String),
    ("ip_isp", ValueKind::String),
    ("ip_organization", ValueKind::String),
    ("ip_domain", ValueKind::String),
    ("ip_netspeed", ValueKind::String),
    ("page_url", ValueKind::String),
    ("page_title", ValueKind::String),
    ("page_referrer", ValueKind::String),
    ("page_urlscheme", ValueKind::String),
    ("page_urlhost", ValueKind::String),
    ("page_urlport", ValueKind::Integer),
    ("page_urlpath", ValueKind::String),
    ("page_urlquery", ValueKind::String),
    ("page_urlfragment", ValueKind::String),
    ("refr_urlscheme", ValueKind::String),
    ("refr_urlhost", ValueKind::String),
    ("refr_urlport", ValueKind::Integer),
    ("refr_urlpath", ValueKind::String),
    ("refr_urlquery", ValueKind::String),
    ("refr_urlfragment", ValueKind::String),
    ("refr_medium", ValueKind::String),
    ("refr_source", ValueKind::String),
    ("refr_term", ValueKind::String),
    ("mkt_medium", ValueKind::String),
    ("mkt_source", ValueKind::String),
    ("mkt_term", ValueKind::String),
    ("mkt_content", ValueKind::String),
    ("mkt_campaign", ValueKind::String),
    ("contexts", ValueKind::Contexts),
    ("se_category", ValueKind::String),
    ("se_action", ValueKind::String),
    ("se_label", ValueKind::String),
    ("se_property", ValueKind::String),
    ("se_value", ValueKind::String),
    ("unstruct_event", ValueKind::Unstruct),
    ("tr_orderid", ValueKind::String),
    ("tr_affiliation", ValueKind::String),
    ("tr_total", ValueKind::Double),
    ("tr_tax", ValueKind::Double),
    ("tr_shipping", ValueKind::Double),
    ("tr_city", ValueKind::String),
    ("tr_state", ValueKind::String),
    ("tr_country", ValueKind::String),
    ("ti_orderid", ValueKind::String),
    ("ti_sku", ValueKind::String),
    ("ti_name", ValueKind::String),
    ("ti_category", ValueKind::String),
    ("ti_price", ValueKind::Double),
    ("ti_quantity", ValueKind::Integer),
    ("pp_xoffset_min", ValueKind::Integer),
    ("pp_xoffset_max", ValueKind::Integer),
    ("pp_yoffset_min", ValueKind::Integer),
    ("pp_yoffset_max", ValueKind::Integer),
    ("useragent", ValueKind::String),
    ("br_name", ValueKind::String),
    ("br_family", ValueKind::String),
    ("br_version", ValueKind::String),
    ("br_type", ValueKind::String),
    ("br_renderengine", ValueKind::String),
    ("br_lang", ValueKind::String),
    ("br_features_pdf", ValueKind::Boolean),
    ("br_features_flash", ValueKind::Boolean),
    ("br_features_java", ValueKind::Boolean),
    ("br_features_director", ValueKind::Boolean),
    ("br_features_quicktime", ValueKind::Boolean),
    ("br_features_realplayer", ValueKind::Boolean),
    ("br_features_windowsmedia", ValueKind::Boolean),
    ("br_features_gears", ValueKind::Boolean),
    ("br_features_silverlight", ValueKind::Boolean),
    ("br_cookies", ValueKind::Boolean),
    ("br_colordepth", ValueKind::String),
    ("br_viewwidth", ValueKind::Integer),
    ("br_viewheight", ValueKind::Integer),
    ("os_name", ValueKind::String),
    ("os_family", ValueKind::String),
    ("os_manufacturer", ValueKind::String),
    ("os_timezone", ValueKind::String),
    ("dvce_type", ValueKind::String),
    ("dvce_ismobile", ValueKind::Boolean),
    ("dvce_screenwidth", ValueKind::Integer),
    ("dvce_screenheight", ValueKind::Integer),
    ("doc_charset", ValueKind::String),
    ("doc_width", ValueKind::Integer),
    ("doc_height", ValueKind::Integer),
    ("tr_currency", ValueKind::String),
    ("tr_total_base", ValueKind::Double),
    ("tr_tax_base", ValueKind::Double),
    ("tr_shipping_base", ValueKind::Double),
    ("ti_currency", ValueKind::String),
    ("ti_price_base", ValueKind::Double),
    ("base_currency", ValueKind::String),
    ("geo_timezone", ValueKind::String),
    ("mkt_clickid", ValueKind::String),
    ("mkt_network", ValueKind::String),
    ("etl_tags", ValueKind::String),
    ("dvce_sent_tstamp", ValueKind::Timestamp),
    ("refr_domain_userid", ValueKind::String),
    ("refr_device_tstamp", ValueKind::Timestamp),
    ("derived_contexts", ValueKind::Contexts),
    ("domain_sessionid", ValueKind::String),
    ("derived_tstamp", ValueKind::Timestamp),
    ("event_vendor", ValueKind::String),
    ("event_name", ValueKind::String),
    ("event_format", ValueKind::String),
    ("event_version", ValueKind::String),
    ("event_fingerprint", ValueKind::String),
    ("true_tstamp", ValueKind::Timestamp),
];

/// One column of the field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Output key of the column.
    pub name: String,
    /// How the column is decoded.
    pub kind: ValueKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered column table with a name index.
#[derive(Debug, Clone)]
pub struct FieldTable {
    specs: Vec<FieldSpec>,
    index: HashMap<String, usize>,
    geo: Option<(usize, usize)>,
}

impl FieldTable {
    /// The standard enriched event table.
    pub fn enriched() -> Self {
        let specs: Vec<FieldSpec> = ENRICHED_EVENT_FIELDS
            .iter()
            .map(|(name, kind)| FieldSpec::new(*name, *kind))
            .collect();
        let index = index_specs(&specs);
        let geo = match (index.get(GEO_LATITUDE), index.get(GEO_LONGITUDE)) {
            (Some(lat), Some(lon)) => Some((*lat, *lon)),
            _ => None,
        };
        Self { specs, index, geo }
    }

    /// The process-wide standard table, built on first use.
    pub fn global() -> &'static FieldTable {
        static TABLE: OnceLock<FieldTable> = OnceLock::new();
        TABLE.get_or_init(FieldTable::enriched)
    }

    /// Builds a custom table.
    ///
    /// `geo` names the latitude and longitude columns used for
    /// `geo_location`; both must exist and be doubles.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for an empty table, duplicate names, or unusable geo
    /// columns.
    pub fn from_specs(specs: Vec<FieldSpec>, geo: Option<(&str, &str)>) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        let mut index = HashMap::with_capacity(specs.len());
        for (idx, spec) in specs.iter().enumerate() {
            if index.insert(spec.name.clone(), idx).is_some() {
                return Err(ConfigError::DuplicateField(spec.name.clone()));
            }
        }

        let geo = match geo {
            Some((lat, lon)) => {
                let lookup = |name: &str| -> Result<usize, ConfigError> {
                    let idx = *index
                        .get(name)
                        .ok_or_else(|| ConfigError::UnknownGeoField(name.to_string()))?;
                    if specs[idx].kind != ValueKind::Double {
                        return Err(ConfigError::GeoFieldNotDouble(name.to_string()));
                    }
                    Ok(idx)
                };
                Some((lookup(lat)?, lookup(lon)?))
            }
            None => None,
        };

        Ok(Self { specs, index, geo })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn spec(&self, index: usize) -> Option<&FieldSpec> {
        self.specs.get(index)
    }

    /// Position of the column named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Positions of the latitude and longitude columns.
    pub fn geo_columns(&self) -> Option<(usize, usize)> {
        self.geo
    }

    /// Positions of every column of `kind`, in table order.
    pub fn columns_of(&self, kind: ValueKind) -> impl Iterator<Item = usize> + '_ {
        self.specs
            .iter()
            .enumerate()
            .filter(move |(_, spec)| spec.kind == kind)
            .map(|(idx, _)| idx)
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::enriched()
    }
}

fn index_specs(specs: &[FieldSpec]) -> HashMap<String, usize> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, spec)| (spec.name.clone(), idx))
        .collect()
}
