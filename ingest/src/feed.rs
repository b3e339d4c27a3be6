// ingest/src/feed.rs

use serde::Deserialize;

/// The upstream XML envelope: `<response><header/><body/></response>`.
///
/// Every level is optional; a degraded upstream answer (empty body, no
/// items) decodes to an empty entry list rather than an error.
#[derive(Debug, Default, Deserialize)]
pub struct FeedResponse {
    pub header: Option<FeedHeader>,
    pub body: Option<FeedBody>,
}

impl FeedResponse {
    /// The upstream result code; `"00"` means a normal answer. The feed
    /// reports service errors inside a successful HTTP response.
    pub fn result_code(&self) -> Option<&str> {
        self.header.as_ref()?.result_code.as_deref()
    }

    pub fn result_msg(&self) -> Option<&str> {
        self.header.as_ref()?.result_msg.as_deref()
    }

    /// Flattens the envelope into its hospital entries.
    ///
    /// The feed emits one `<item>` element per facility; whether a region
    /// has one facility or many, the entries decode into the same sequence
    /// here, so a lone object and a one-element list are indistinguishable
    /// downstream.
    pub fn into_entries(self) -> Vec<RawHospitalEntry> {
        self.body
            .and_then(|body| body.items)
            .map(|items| items.item)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedHeader {
    #[serde(rename = "resultCode")]
    pub result_code: Option<String>,
    #[serde(rename = "resultMsg")]
    pub result_msg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedBody {
    pub items: Option<FeedItems>,
    #[serde(rename = "totalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedItems {
    #[serde(default)]
    pub item: Vec<RawHospitalEntry>,
}

/// One raw per-hospital entry, exactly as loosely typed as the feed emits
/// it. Every field is optional text; absence of any field is never an
/// error, it is resolved by the coercion table in [`crate::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawHospitalEntry {
    pub hpid: Option<String>,
    pub dutyname: Option<String>,
    pub dutytel3: Option<String>,
    pub hvec: Option<String>,
    pub hvgc: Option<String>,
    pub hvamyn: Option<String>,
    pub stage1: Option<String>,
    pub stage2: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::FeedResponse;

    #[test]
    fn should_decode_multiple_items_into_sequence() {
        let xml = r#"
            <response>
              <header><resultCode>00</resultCode><resultMsg>NORMAL SERVICE.</resultMsg></header>
              <body>
                <items>
                  <item><hpid>A1100001</hpid><dutyname>강남병원</dutyname><hvec>3</hvec></item>
                  <item><hpid>A1100002</hpid><dutyname>역삼병원</dutyname><hvec>0</hvec></item>
                </items>
                <totalCount>2</totalCount>
              </body>
            </response>"#;
        let response: FeedResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(response.result_code(), Some("00"));
        let entries = response.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hpid.as_deref(), Some("A1100001"));
        assert_eq!(entries[1].dutyname.as_deref(), Some("역삼병원"));
    }

    #[test]
    fn should_decode_lone_item_like_a_one_element_list() {
        let xml = r#"
            <response>
              <body>
                <items>
                  <item><hpid>A1100001</hpid><hvec>2</hvec><hvgc>1</hvgc><hvamyn>Y</hvamyn></item>
                </items>
              </body>
            </response>"#;
        let response: FeedResponse = quick_xml::de::from_str(xml).unwrap();
        let entries = response.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hvamyn.as_deref(), Some("Y"));
    }

    #[test]
    fn should_decode_absent_items_as_empty_sequence() {
        let xml = r#"
            <response>
              <header><resultCode>00</resultCode></header>
              <body><totalCount>0</totalCount></body>
            </response>"#;
        let response: FeedResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(response.into_entries().is_empty());
    }

    #[test]
    fn should_decode_empty_body_as_empty_sequence() {
        let xml = "<response></response>";
        let response: FeedResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(response.into_entries().is_empty());
    }

    #[test]
    fn should_reject_non_xml_payload() {
        let result = quick_xml::de::from_str::<FeedResponse>("{\"not\": \"xml\"}");
        assert!(result.is_err());
    }
}
