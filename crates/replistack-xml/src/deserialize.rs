//! Parsing replication XML into the wire types.
//!
//! Deserialization always targets the unchecked wire representation; turning
//! that into a validated configuration is a separate, explicit step through
//! the model crate's checked constructor. Unknown elements are skipped so a
//! body produced by a newer service revision still parses.

use quick_xml::Reader;
use quick_xml::events::Event;

use replistack_model::types::{
    AccessControlTranslation, DeleteMarkerReplication, Destination, EncryptionConfiguration,
    ExistingObjectReplication, Metrics, ReplicaModifications, ReplicationConfiguration,
    ReplicationRule, ReplicationRuleAndOperator, ReplicationRuleFilter, ReplicationTime,
    ReplicationTimeValue, SourceSelectionCriteria, SseKmsEncryptedObjects, Tag,
};

use crate::error::XmlError;

/// Trait for deserializing replication types from XML.
///
/// The opening tag of the element has already been consumed by the caller;
/// the implementation reads child content until the matching end tag.
pub trait XmlDeserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the XML is malformed or a value cannot be
    /// parsed.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize a replication XML document into a typed value.
///
/// Finds the root element (skipping any declaration, comments, and
/// whitespace) and delegates to the type's [`XmlDeserialize`] implementation.
///
/// # Errors
///
/// Returns [`XmlError`] if the XML is malformed or deserialization fails.
pub fn from_xml<T: XmlDeserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                return T::deserialize_xml(&mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// Read the text content of the current element and consume its end tag.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| {
                            XmlError::ParseError(format!("unknown entity: &{name};"))
                        })?;
                    text.push_str(resolved);
                }
            }
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Parse an i32 from XML text.
fn parse_i32(s: &str) -> Result<i32, XmlError> {
    s.parse::<i32>()
        .map_err(|e| XmlError::ParseError(format!("invalid i32 '{s}': {e}")))
}

/// Decode the element name of a start event.
fn element_name(e: &quick_xml::events::BytesStart<'_>) -> Result<String, XmlError> {
    let name = e.name();
    std::str::from_utf8(name.as_ref())
        .map(str::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

// ---------------------------------------------------------------------------
// XmlDeserialize implementations
// ---------------------------------------------------------------------------

impl XmlDeserialize for Tag {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut key = None;
        let mut value = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Key" => key = Some(read_text_content(reader)?),
                    "Value" => value = Some(read_text_content(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Tag".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(Tag {
            key: key.unwrap_or_default(),
            value: value.unwrap_or_default(),
        })
    }
}

impl XmlDeserialize for ReplicationRuleAndOperator {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut prefix = None;
        let mut tags = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Prefix" => prefix = Some(read_text_content(reader)?),
                    "Tag" => tags.push(Tag::deserialize_xml(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in And".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(ReplicationRuleAndOperator { prefix, tags })
    }
}

impl XmlDeserialize for ReplicationRuleFilter {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut prefix = None;
        let mut tag = None;
        let mut and = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Prefix" => prefix = Some(read_text_content(reader)?),
                    "Tag" => tag = Some(Tag::deserialize_xml(reader)?),
                    "And" => and = Some(ReplicationRuleAndOperator::deserialize_xml(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Filter".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(ReplicationRuleFilter { prefix, tag, and })
    }
}

impl XmlDeserialize for AccessControlTranslation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut owner = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Owner" => {
                        let text = read_text_content(reader)?;
                        owner = Some(text.as_str().into());
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in AccessControlTranslation".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(AccessControlTranslation {
            owner: owner.unwrap_or_default(),
        })
    }
}

impl XmlDeserialize for EncryptionConfiguration {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut replica_kms_key_id = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "ReplicaKmsKeyID" => replica_kms_key_id = Some(read_text_content(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in EncryptionConfiguration".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(EncryptionConfiguration { replica_kms_key_id })
    }
}

impl XmlDeserialize for ReplicationTimeValue {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut minutes = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Minutes" => {
                        let text = read_text_content(reader)?;
                        minutes = Some(parse_i32(&text)?);
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in time value".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(ReplicationTimeValue { minutes })
    }
}

impl XmlDeserialize for ReplicationTime {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut status = None;
        let mut time = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Status" => {
                        let text = read_text_content(reader)?;
                        status = Some(text.as_str().into());
                    }
                    "Time" => time = Some(ReplicationTimeValue::deserialize_xml(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in ReplicationTime".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(ReplicationTime {
            status: status.unwrap_or_default(),
            time,
        })
    }
}

impl XmlDeserialize for Metrics {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut status = None;
        let mut event_threshold = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Status" => {
                        let text = read_text_content(reader)?;
                        status = Some(text.as_str().into());
                    }
                    "EventThreshold" => {
                        event_threshold = Some(ReplicationTimeValue::deserialize_xml(reader)?);
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Metrics".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(Metrics {
            status: status.unwrap_or_default(),
            event_threshold,
        })
    }
}

impl XmlDeserialize for Destination {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut bucket = None;
        let mut account = None;
        let mut storage_class = None;
        let mut access_control_translation = None;
        let mut encryption_configuration = None;
        let mut replication_time = None;
        let mut metrics = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Bucket" => bucket = Some(read_text_content(reader)?),
                    "Account" => account = Some(read_text_content(reader)?),
                    "StorageClass" => {
                        let text = read_text_content(reader)?;
                        storage_class = Some(text.as_str().into());
                    }
                    "AccessControlTranslation" => {
                        access_control_translation =
                            Some(AccessControlTranslation::deserialize_xml(reader)?);
                    }
                    "EncryptionConfiguration" => {
                        encryption_configuration =
                            Some(EncryptionConfiguration::deserialize_xml(reader)?);
                    }
                    "ReplicationTime" => {
                        replication_time = Some(ReplicationTime::deserialize_xml(reader)?);
                    }
                    "Metrics" => metrics = Some(Metrics::deserialize_xml(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Destination".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(Destination {
            bucket: bucket.ok_or_else(|| XmlError::MissingElement("Bucket".to_string()))?,
            account,
            storage_class,
            access_control_translation,
            encryption_configuration,
            replication_time,
            metrics,
        })
    }
}

impl XmlDeserialize for DeleteMarkerReplication {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut status = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Status" => {
                        let text = read_text_content(reader)?;
                        status = Some(text.as_str().into());
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in DeleteMarkerReplication".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(DeleteMarkerReplication {
            status: status.unwrap_or_default(),
        })
    }
}

impl XmlDeserialize for ExistingObjectReplication {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut status = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Status" => {
                        let text = read_text_content(reader)?;
                        status = Some(text.as_str().into());
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in ExistingObjectReplication".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(ExistingObjectReplication {
            status: status.unwrap_or_default(),
        })
    }
}

impl XmlDeserialize for SseKmsEncryptedObjects {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut status = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Status" => {
                        let text = read_text_content(reader)?;
                        status = Some(text.as_str().into());
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in SseKmsEncryptedObjects".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(SseKmsEncryptedObjects {
            status: status.unwrap_or_default(),
        })
    }
}

impl XmlDeserialize for ReplicaModifications {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut status = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Status" => {
                        let text = read_text_content(reader)?;
                        status = Some(text.as_str().into());
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in ReplicaModifications".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(ReplicaModifications {
            status: status.unwrap_or_default(),
        })
    }
}

impl XmlDeserialize for SourceSelectionCriteria {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut sse_kms_encrypted_objects = None;
        let mut replica_modifications = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "SseKmsEncryptedObjects" => {
                        sse_kms_encrypted_objects =
                            Some(SseKmsEncryptedObjects::deserialize_xml(reader)?);
                    }
                    "ReplicaModifications" => {
                        replica_modifications =
                            Some(ReplicaModifications::deserialize_xml(reader)?);
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in SourceSelectionCriteria".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(SourceSelectionCriteria {
            sse_kms_encrypted_objects,
            replica_modifications,
        })
    }
}

impl XmlDeserialize for ReplicationRule {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut rule = ReplicationRule::default();
        let mut destination = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "ID" => rule.id = Some(read_text_content(reader)?),
                    "Priority" => {
                        let text = read_text_content(reader)?;
                        rule.priority = Some(parse_i32(&text)?);
                    }
                    "Prefix" => rule.prefix = Some(read_text_content(reader)?),
                    "Filter" => {
                        rule.filter = Some(ReplicationRuleFilter::deserialize_xml(reader)?);
                    }
                    "Status" => {
                        let text = read_text_content(reader)?;
                        rule.status = text.as_str().into();
                    }
                    "SourceSelectionCriteria" => {
                        rule.source_selection_criteria =
                            Some(SourceSelectionCriteria::deserialize_xml(reader)?);
                    }
                    "ExistingObjectReplication" => {
                        rule.existing_object_replication =
                            Some(ExistingObjectReplication::deserialize_xml(reader)?);
                    }
                    "DeleteMarkerReplication" => {
                        rule.delete_marker_replication =
                            Some(DeleteMarkerReplication::deserialize_xml(reader)?);
                    }
                    "Destination" => {
                        destination = Some(Destination::deserialize_xml(reader)?);
                    }
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Rule".to_string(),
                    ));
                }
                _ => {}
            }
        }

        rule.destination =
            destination.ok_or_else(|| XmlError::MissingElement("Destination".to_string()))?;
        Ok(rule)
    }
}

impl XmlDeserialize for ReplicationConfiguration {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut role = None;
        let mut rules = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => match element_name(&e)?.as_str() {
                    "Role" => role = Some(read_text_content(reader)?),
                    "Rule" => rules.push(ReplicationRule::deserialize_xml(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in ReplicationConfiguration".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(ReplicationConfiguration { role, rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replistack_model::types::{ReplicationRuleStatus, StorageClass};

    #[test]
    fn test_should_parse_minimal_configuration() {
        let xml = b"<ReplicationConfiguration>\
            <Role>arn:aws:iam::123:role/repl</Role>\
            <Rule><ID>r1</ID><Status>Enabled</Status>\
            <Destination><Bucket>arn:aws:s3:::dest</Bucket></Destination></Rule>\
            </ReplicationConfiguration>";

        let config: ReplicationConfiguration = from_xml(xml).expect("parse");
        assert_eq!(config.role.as_deref(), Some("arn:aws:iam::123:role/repl"));
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].id.as_deref(), Some("r1"));
        assert_eq!(config.rules[0].status, ReplicationRuleStatus::Enabled);
        assert_eq!(config.rules[0].destination.bucket, "arn:aws:s3:::dest");
    }

    #[test]
    fn test_should_parse_configuration_with_declaration_and_whitespace() {
        let xml = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
            <ReplicationConfiguration>\n\
              <Role>role</Role>\n\
              <Rule><Status>Disabled</Status>\
              <Destination><Bucket>arn:aws:s3:::d</Bucket></Destination></Rule>\n\
            </ReplicationConfiguration>\n";

        let config: ReplicationConfiguration = from_xml(xml).expect("parse");
        assert_eq!(config.role.as_deref(), Some("role"));
        assert_eq!(config.rules[0].status, ReplicationRuleStatus::Disabled);
    }

    #[test]
    fn test_should_parse_rules_in_document_order() {
        let xml = b"<ReplicationConfiguration><Role>r</Role>\
            <Rule><ID>first</ID><Status>Enabled</Status>\
            <Destination><Bucket>arn:aws:s3:::d</Bucket></Destination></Rule>\
            <Rule><ID>second</ID><Status>Enabled</Status>\
            <Destination><Bucket>arn:aws:s3:::d</Bucket></Destination></Rule>\
            </ReplicationConfiguration>";

        let config: ReplicationConfiguration = from_xml(xml).expect("parse");
        let ids: Vec<_> = config
            .rules
            .iter()
            .map(|r| r.id.clone().unwrap_or_default())
            .collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_should_parse_full_rule_shape() {
        let xml = b"<ReplicationConfiguration><Role>r</Role>\
            <Rule><ID>full</ID><Priority>3</Priority>\
            <Filter><And><Prefix>docs/</Prefix>\
            <Tag><Key>env</Key><Value>prod</Value></Tag></And></Filter>\
            <Status>Enabled</Status>\
            <SourceSelectionCriteria>\
            <SseKmsEncryptedObjects><Status>Enabled</Status></SseKmsEncryptedObjects>\
            </SourceSelectionCriteria>\
            <DeleteMarkerReplication><Status>Disabled</Status></DeleteMarkerReplication>\
            <Destination><Bucket>arn:aws:s3:::d</Bucket>\
            <StorageClass>GLACIER</StorageClass>\
            <ReplicationTime><Status>Enabled</Status><Time><Minutes>15</Minutes></Time>\
            </ReplicationTime>\
            <Metrics><Status>Enabled</Status><EventThreshold><Minutes>15</Minutes>\
            </EventThreshold></Metrics></Destination></Rule>\
            </ReplicationConfiguration>";

        let config: ReplicationConfiguration = from_xml(xml).expect("parse");
        let rule = &config.rules[0];

        assert_eq!(rule.priority, Some(3));
        let filter = rule.filter.as_ref().expect("filter");
        let and = filter.and.as_ref().expect("and operator");
        assert_eq!(and.prefix.as_deref(), Some("docs/"));
        assert_eq!(and.tags[0].key, "env");
        assert_eq!(and.tags[0].value, "prod");

        let ssc = rule.source_selection_criteria.as_ref().expect("ssc");
        assert!(ssc.sse_kms_encrypted_objects.is_some());

        let dest = &rule.destination;
        assert_eq!(dest.storage_class, Some(StorageClass::Glacier));
        let rt = dest.replication_time.as_ref().expect("replication time");
        assert_eq!(rt.time.as_ref().and_then(|t| t.minutes), Some(15));
        let metrics = dest.metrics.as_ref().expect("metrics");
        assert_eq!(
            metrics.event_threshold.as_ref().and_then(|t| t.minutes),
            Some(15)
        );
    }

    #[test]
    fn test_should_unescape_text_content() {
        let xml = b"<ReplicationConfiguration><Role>a&amp;b</Role>\
            </ReplicationConfiguration>";
        let config: ReplicationConfiguration = from_xml(xml).expect("parse");
        assert_eq!(config.role.as_deref(), Some("a&b"));
    }

    #[test]
    fn test_should_skip_unknown_elements() {
        let xml = b"<ReplicationConfiguration><Role>r</Role>\
            <FutureThing><Nested>x</Nested></FutureThing>\
            <Rule><Status>Enabled</Status>\
            <Destination><Bucket>arn:aws:s3:::d</Bucket></Destination></Rule>\
            </ReplicationConfiguration>";

        let config: ReplicationConfiguration = from_xml(xml).expect("parse");
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_should_reject_rule_without_destination() {
        let xml = b"<ReplicationConfiguration><Role>r</Role>\
            <Rule><Status>Enabled</Status></Rule>\
            </ReplicationConfiguration>";

        let err = from_xml::<ReplicationConfiguration>(xml).unwrap_err();
        assert!(matches!(err, XmlError::MissingElement(e) if e == "Destination"));
    }

    #[test]
    fn test_should_reject_empty_input() {
        let err = from_xml::<ReplicationConfiguration>(b"").unwrap_err();
        assert!(matches!(err, XmlError::MissingElement(_)));
    }

    #[test]
    fn test_should_round_trip_canonical_encoding() {
        let xml = "<ReplicationConfiguration>\
            <Role>arn:aws:iam::123:role/repl</Role>\
            <Rule><ID>a</ID><Status>Enabled</Status>\
            <Destination><Bucket>arn:aws:s3:::d</Bucket></Destination></Rule>\
            <Rule><ID>b</ID><Status>Disabled</Status>\
            <Destination><Bucket>arn:aws:s3:::d2</Bucket></Destination></Rule>\
            </ReplicationConfiguration>";

        let config: ReplicationConfiguration = from_xml(xml.as_bytes()).expect("parse");
        let encoded = crate::serialize::to_canonical_xml(&config).expect("encode");
        assert_eq!(encoded, xml);
    }
}
