//! OpenRTB 2.5 request and response objects.
//!
//! Scalar fields use the zero value for "absent" and are omitted on output,
//! matching how exchanges conventionally serialize these objects. `ext`
//! fields are kept raw (see [`RawExt`]).
//!
//! Only the fields the FPD engine and adapters read are modelled. Every other
//! member (`regs`, `source`, `imp.pmp`, ...) lands in the object's `other`
//! map and is written back unchanged, so a request survives a decode and
//! encode without losing data.

use crate::RawExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

fn is_zero_i8(v: &i8) -> bool {
    *v == 0
}

fn is_zero_f64(v: &f64) -> bool {
    *v == 0.0
}

/// Top-level bid request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidRequest {
    pub id: String,
    pub imp: Vec<Imp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "is_zero_i8")]
    pub test: i8,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub tmax: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cur: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    /// Members not modelled above.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// An impression being offered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Imp {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tagid: String,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub bidfloor: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bidfloorcur: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Website the impression is shown on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cat: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sectioncat: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pagecat: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page: String,
    #[serde(rename = "ref", skip_serializing_if = "String::is_empty")]
    pub referrer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "is_zero_i8")]
    pub mobile: i8,
    #[serde(skip_serializing_if = "is_zero_i8")]
    pub privacypolicy: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Application the impression is shown in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bundle: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storeurl: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cat: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sectioncat: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pagecat: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ver: String,
    #[serde(skip_serializing_if = "is_zero_i8")]
    pub privacypolicy: i8,
    #[serde(skip_serializing_if = "is_zero_i8")]
    pub paid: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Publisher of a site or app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publisher {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Content the impression appears next to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub episode: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub series: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub season: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cat: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The human user of the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub buyeruid: String,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub yob: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gender: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub customdata: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A block of audience or contextual data from one provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Data {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segment: Vec<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A single data point within a [`Data`] block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Response returned by a bidder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub seatbid: Vec<SeatBid>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bidid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cur: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Bids from one buyer seat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatBid {
    pub bid: Vec<Bid>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub seat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A single bid on an impression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bid {
    pub id: String,
    pub impid: String,
    pub price: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub adm: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adomain: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub crid: String,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub w: i64,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub h: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<RawExt>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
