//! Encoding replication types into the canonical wire document.
//!
//! The canonical form differs from general S3 RestXml output in three ways:
//! the XML declaration is suppressed, no `xmlns` attribute is written on the
//! root, and the finished document is flattened to a single line. quick-xml
//! writes no inter-element whitespace on its own, but text content may carry
//! CR/LF, so the encoder strips both from the finished buffer before
//! returning.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::BytesText;

use replistack_model::types::{
    AccessControlTranslation, DeleteMarkerReplication, Destination, EncryptionConfiguration,
    ExistingObjectReplication, Metrics, ReplicaModifications, ReplicationConfiguration,
    ReplicationRule, ReplicationRuleAndOperator, ReplicationRuleFilter, ReplicationTime,
    ReplicationTimeValue, SourceSelectionCriteria, SseKmsEncryptedObjects, Tag,
};

use crate::error::XmlError;

/// Trait for serializing replication types to XML.
///
/// Implementors write their own element (or child elements, for flattened
/// shapes) into the current writer context. The root element is handled by
/// [`to_canonical_xml`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require
/// `io::Result<()>`.
pub trait XmlSerialize {
    /// Serialize this value into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Encode a configuration as the canonical single-line, namespace-free
/// document required by the replication control plane.
///
/// The output starts directly at `<ReplicationConfiguration>`, contains no
/// `xmlns` attributes, and contains no `\r` or `\n` characters.
///
/// # Errors
///
/// Returns [`XmlError`] if serialization fails. Callers must not transmit
/// anything on error; there is no partial output.
pub fn to_canonical_xml(config: &ReplicationConfiguration) -> Result<String, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer
        .create_element("ReplicationConfiguration")
        .write_inner_content(|w| config.serialize_xml(w))?;

    // Text content may carry CR/LF; the wire format forbids both.
    buf.retain(|&b| b != b'\r' && b != b'\n');

    String::from_utf8(buf).map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Encode a configuration, never failing.
///
/// Retained for callers bound to the legacy SDK contract where the encoder
/// has no error channel: on failure the error is logged and an empty string
/// is returned. An empty result means the higher-level request must be
/// aborted. New callers should prefer [`to_canonical_xml`].
#[must_use]
pub fn to_canonical_xml_lossy(config: &ReplicationConfiguration) -> String {
    match to_canonical_xml(config) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize replication configuration XML");
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional i32.
fn write_optional_i32<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<i32>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Write `<tag><Minutes>n</Minutes></tag>` for a time value under the given
/// element name (`Time` or `EventThreshold`).
fn write_time_value<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &ReplicationTimeValue,
) -> io::Result<()> {
    writer.create_element(tag).write_inner_content(|w| {
        write_optional_i32(w, "Minutes", value.minutes)?;
        Ok(())
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// XmlSerialize implementations
// ---------------------------------------------------------------------------

impl XmlSerialize for Tag {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Tag").write_inner_content(|w| {
            write_text_element(w, "Key", &self.key)?;
            write_text_element(w, "Value", &self.value)?;
            Ok(())
        })?;
        Ok(())
    }
}

impl XmlSerialize for ReplicationRuleAndOperator {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("And").write_inner_content(|w| {
            write_optional_text(w, "Prefix", self.prefix.as_deref())?;
            for tag in &self.tags {
                tag.serialize_xml(w)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl XmlSerialize for ReplicationRuleFilter {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Filter").write_inner_content(|w| {
            write_optional_text(w, "Prefix", self.prefix.as_deref())?;
            if let Some(ref tag) = self.tag {
                tag.serialize_xml(w)?;
            }
            if let Some(ref and) = self.and {
                and.serialize_xml(w)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl XmlSerialize for AccessControlTranslation {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("AccessControlTranslation")
            .write_inner_content(|w| {
                write_text_element(w, "Owner", self.owner.as_str())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for EncryptionConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("EncryptionConfiguration")
            .write_inner_content(|w| {
                write_optional_text(w, "ReplicaKmsKeyID", self.replica_kms_key_id.as_deref())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for ReplicationTime {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ReplicationTime")
            .write_inner_content(|w| {
                write_text_element(w, "Status", self.status.as_str())?;
                if let Some(ref time) = self.time {
                    write_time_value(w, "Time", time)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for Metrics {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Metrics").write_inner_content(|w| {
            write_text_element(w, "Status", self.status.as_str())?;
            if let Some(ref threshold) = self.event_threshold {
                write_time_value(w, "EventThreshold", threshold)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl XmlSerialize for Destination {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Destination")
            .write_inner_content(|w| {
                write_text_element(w, "Bucket", &self.bucket)?;
                write_optional_text(w, "Account", self.account.as_deref())?;
                if let Some(ref sc) = self.storage_class {
                    write_text_element(w, "StorageClass", sc.as_str())?;
                }
                if let Some(ref act) = self.access_control_translation {
                    act.serialize_xml(w)?;
                }
                if let Some(ref enc) = self.encryption_configuration {
                    enc.serialize_xml(w)?;
                }
                if let Some(ref rt) = self.replication_time {
                    rt.serialize_xml(w)?;
                }
                if let Some(ref metrics) = self.metrics {
                    metrics.serialize_xml(w)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for DeleteMarkerReplication {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("DeleteMarkerReplication")
            .write_inner_content(|w| {
                write_text_element(w, "Status", self.status.as_str())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for ExistingObjectReplication {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ExistingObjectReplication")
            .write_inner_content(|w| {
                write_text_element(w, "Status", self.status.as_str())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for SseKmsEncryptedObjects {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("SseKmsEncryptedObjects")
            .write_inner_content(|w| {
                write_text_element(w, "Status", self.status.as_str())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for ReplicaModifications {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ReplicaModifications")
            .write_inner_content(|w| {
                write_text_element(w, "Status", self.status.as_str())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for SourceSelectionCriteria {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("SourceSelectionCriteria")
            .write_inner_content(|w| {
                if let Some(ref sse) = self.sse_kms_encrypted_objects {
                    sse.serialize_xml(w)?;
                }
                if let Some(ref rm) = self.replica_modifications {
                    rm.serialize_xml(w)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for ReplicationRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Rule").write_inner_content(|w| {
            write_optional_text(w, "ID", self.id.as_deref())?;
            write_optional_i32(w, "Priority", self.priority)?;
            write_optional_text(w, "Prefix", self.prefix.as_deref())?;
            if let Some(ref filter) = self.filter {
                filter.serialize_xml(w)?;
            }
            write_text_element(w, "Status", self.status.as_str())?;
            if let Some(ref ssc) = self.source_selection_criteria {
                ssc.serialize_xml(w)?;
            }
            if let Some(ref eor) = self.existing_object_replication {
                eor.serialize_xml(w)?;
            }
            if let Some(ref dmr) = self.delete_marker_replication {
                dmr.serialize_xml(w)?;
            }
            self.destination.serialize_xml(w)?;
            Ok(())
        })?;
        Ok(())
    }
}

impl XmlSerialize for ReplicationConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        // Role first, then rules in evaluation order.
        write_optional_text(writer, "Role", self.role.as_deref())?;
        for rule in &self.rules {
            rule.serialize_xml(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replistack_model::types::{DeleteMarkerReplicationStatus, ReplicationRuleStatus};

    fn rule(id: &str) -> ReplicationRule {
        ReplicationRule {
            id: Some(id.to_owned()),
            status: ReplicationRuleStatus::Enabled,
            destination: Destination {
                bucket: "arn:aws:s3:::dest".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn config(rules: Vec<ReplicationRule>) -> ReplicationConfiguration {
        ReplicationConfiguration {
            role: Some("arn:aws:iam::123:role/repl".to_owned()),
            rules,
        }
    }

    #[test]
    fn test_should_encode_minimal_configuration() {
        let xml = to_canonical_xml(&config(vec![rule("r1")])).expect("encode");

        assert_eq!(
            xml,
            "<ReplicationConfiguration>\
             <Role>arn:aws:iam::123:role/repl</Role>\
             <Rule><ID>r1</ID><Status>Enabled</Status>\
             <Destination><Bucket>arn:aws:s3:::dest</Bucket></Destination></Rule>\
             </ReplicationConfiguration>"
        );
    }

    #[test]
    fn test_should_start_at_root_element_without_declaration() {
        let xml = to_canonical_xml(&config(vec![rule("r1")])).expect("encode");
        assert!(xml.starts_with("<ReplicationConfiguration>"));
        assert!(!xml.contains("<?xml"));
    }

    #[test]
    fn test_should_not_emit_namespaces_or_line_breaks() {
        let xml = to_canonical_xml(&config(vec![rule("a"), rule("b")])).expect("encode");
        assert!(!xml.contains("xmlns"));
        assert!(!xml.contains('\n'));
        assert!(!xml.contains('\r'));
    }

    #[test]
    fn test_should_strip_line_breaks_from_text_content() {
        let mut cfg = config(vec![rule("r1")]);
        cfg.role = Some("arn:aws:iam::123:\r\nrole/repl".to_owned());

        let xml = to_canonical_xml(&cfg).expect("encode");
        assert!(!xml.contains('\n'));
        assert!(!xml.contains('\r'));
        assert!(xml.contains("<Role>arn:aws:iam::123:role/repl</Role>"));
    }

    #[test]
    fn test_should_write_role_before_rules() {
        let xml = to_canonical_xml(&config(vec![rule("r1")])).expect("encode");
        let role_at = xml.find("<Role>").expect("role present");
        let rule_at = xml.find("<Rule>").expect("rule present");
        assert!(role_at < rule_at);
    }

    #[test]
    fn test_should_preserve_rule_order() {
        let forward = to_canonical_xml(&config(vec![rule("a"), rule("b")])).expect("encode");
        let reversed = to_canonical_xml(&config(vec![rule("b"), rule("a")])).expect("encode");

        assert_ne!(forward, reversed);
        assert!(forward.find("<ID>a</ID>").unwrap() < forward.find("<ID>b</ID>").unwrap());
        assert!(reversed.find("<ID>b</ID>").unwrap() < reversed.find("<ID>a</ID>").unwrap());
    }

    #[test]
    fn test_should_escape_special_characters() {
        let mut cfg = config(vec![rule("r1")]);
        cfg.rules[0].filter = Some(ReplicationRuleFilter {
            prefix: None,
            tag: Some(Tag {
                key: "a&b".to_owned(),
                value: "x<y>".to_owned(),
            }),
            and: None,
        });

        let xml = to_canonical_xml(&cfg).expect("encode");
        assert!(xml.contains("<Key>a&amp;b</Key>"));
        assert!(xml.contains("<Value>x&lt;y&gt;</Value>"));
    }

    #[test]
    fn test_should_encode_full_rule_shape() {
        let mut r = rule("full");
        r.priority = Some(7);
        r.delete_marker_replication = Some(DeleteMarkerReplication {
            status: DeleteMarkerReplicationStatus::Disabled,
        });
        r.filter = Some(ReplicationRuleFilter {
            prefix: None,
            tag: None,
            and: Some(ReplicationRuleAndOperator {
                prefix: Some("docs/".to_owned()),
                tags: vec![Tag {
                    key: "env".to_owned(),
                    value: "prod".to_owned(),
                }],
            }),
        });
        r.destination.replication_time = Some(ReplicationTime {
            status: replistack_model::types::ReplicationTimeStatus::Enabled,
            time: Some(ReplicationTimeValue { minutes: Some(15) }),
        });

        let xml = to_canonical_xml(&config(vec![r])).expect("encode");
        assert!(xml.contains("<Priority>7</Priority>"));
        assert!(xml.contains("<DeleteMarkerReplication><Status>Disabled</Status></DeleteMarkerReplication>"));
        assert!(xml.contains("<And><Prefix>docs/</Prefix><Tag><Key>env</Key><Value>prod</Value></Tag></And>"));
        assert!(xml.contains("<ReplicationTime><Status>Enabled</Status><Time><Minutes>15</Minutes></Time></ReplicationTime>"));
    }

    #[test]
    fn test_should_return_encoded_string_from_lossy_path() {
        let xml = to_canonical_xml_lossy(&config(vec![rule("r1")]));
        assert!(xml.starts_with("<ReplicationConfiguration>"));
    }
}
