//! Blueprint wire format.
//!
//! ```text
//! <length>¬<descriptor>§<descriptor>§...‡<remnant>
//! ```
//!
//! `length` is base-10. The key section may be empty. Everything after the
//! first `‡` is the remnant stream, taken verbatim.

use crate::descriptor::LineDescriptor;
use crate::error::{BlueprintError, DescriptorFault};
use crate::select::Selection;
use std::fmt;

pub const LENGTH_DELIMITER: char = '¬';
pub const DESCRIPTOR_SEPARATOR: char = '§';
pub const REMNANT_DELIMITER: char = '‡';

/// Reversible encoding of one compression run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blueprint {
    /// Length of the original text in characters.
    pub original_length: usize,
    /// Committed lines in commit order.
    pub key: Vec<LineDescriptor>,
    /// Uncovered characters in ascending position order.
    pub remnant: String,
}

impl Blueprint {
    /// Assemble the blueprint for `text` from a finished selection.
    pub fn from_selection(text: &[char], selection: &Selection) -> Self {
        let remnant = selection
            .claims
            .free_positions()
            .filter_map(|i| text.get(i))
            .collect();
        Self {
            original_length: text.len(),
            key: selection
                .committed
                .iter()
                .map(|c| c.descriptor.clone())
                .collect(),
            remnant,
        }
    }

    /// Descriptors joined by the separator.
    pub fn key_text(&self) -> String {
        self.key
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(DESCRIPTOR_SEPARATOR.to_string().as_str())
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(wire: &str) -> Result<Self, BlueprintError> {
        let (length_text, rest) = wire
            .split_once(LENGTH_DELIMITER)
            .ok_or(BlueprintError::MissingDelimiter(LENGTH_DELIMITER))?;
        let original_length = parse_length(length_text)?;
        let (key_text, remnant) = rest
            .split_once(REMNANT_DELIMITER)
            .ok_or(BlueprintError::MissingDelimiter(REMNANT_DELIMITER))?;

        let key = if key_text.is_empty() {
            Vec::new()
        } else {
            key_text
                .split(DESCRIPTOR_SEPARATOR)
                .map(|text| {
                    let descriptor = LineDescriptor::parse(text)?;
                    check_fits(&descriptor, original_length).map_err(|fault| {
                        BlueprintError::InvalidDescriptor {
                            descriptor: text.to_string(),
                            fault,
                        }
                    })?;
                    Ok(descriptor)
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            original_length,
            key,
            remnant: remnant.to_string(),
        })
    }
}

/// A decodable line stays inside its own shape and never visits more cells
/// than the blueprint declares.
fn check_fits(descriptor: &LineDescriptor, capacity: usize) -> Result<(), DescriptorFault> {
    let points = descriptor.point_count();
    if points > capacity {
        return Err(DescriptorFault::Oversized { points, capacity });
    }
    let extents = descriptor.shape.extents();
    for point in [&descriptor.start, &descriptor.end] {
        if point.iter().zip(extents).any(|(&c, &extent)| c >= extent) {
            return Err(DescriptorFault::OutOfShape {
                point: point.clone(),
                extents: extents.to_vec(),
            });
        }
    }
    Ok(())
}

fn parse_length(text: &str) -> Result<usize, BlueprintError> {
    let invalid = || BlueprintError::InvalidLength(text.to_string());
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.original_length,
            LENGTH_DELIMITER,
            self.key_text(),
            REMNANT_DELIMITER,
            self.remnant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_blueprint() {
        let bp = Blueprint::default();
        assert_eq!(bp.encode(), "0¬‡");
        assert_eq!(Blueprint::decode("0¬‡").unwrap(), bp);
    }

    #[test]
    fn empty_key_section_has_no_descriptors() {
        let bp = Blueprint::decode("3¬‡abc").unwrap();
        assert!(bp.key.is_empty());
        assert_eq!(bp.remnant, "abc");
    }

    #[test]
    fn key_and_remnant() {
        let wire = "40¬(q,20,0,0,0,19)§(r,20,1,0,1,19)‡";
        let bp = Blueprint::decode(wire).unwrap();
        assert_eq!(bp.original_length, 40);
        assert_eq!(bp.key.len(), 2);
        assert_eq!(bp.key[1].character, 'r');
        assert_eq!(bp.encode(), wire);
    }

    #[test]
    fn remnant_may_hold_delimiters() {
        let bp = Blueprint::decode("4¬‡¬‡§,").unwrap();
        assert_eq!(bp.remnant, "¬‡§,");
    }

    #[test]
    fn missing_delimiters() {
        assert_eq!(
            Blueprint::decode("not-a-blueprint"),
            Err(BlueprintError::MissingDelimiter('¬'))
        );
        assert_eq!(
            Blueprint::decode("5¬abcde"),
            Err(BlueprintError::MissingDelimiter('‡'))
        );
    }

    #[test]
    fn non_numeric_length() {
        assert_eq!(
            Blueprint::decode("five¬‡abcde"),
            Err(BlueprintError::InvalidLength("five".into()))
        );
        assert_eq!(
            Blueprint::decode("+5¬‡abcde"),
            Err(BlueprintError::InvalidLength("+5".into()))
        );
        assert_eq!(
            Blueprint::decode("¬‡"),
            Err(BlueprintError::InvalidLength(String::new()))
        );
    }

    #[test]
    fn oversized_descriptor() {
        let err = Blueprint::decode("5¬(q,20,0,0,0,19)‡").unwrap_err();
        assert_eq!(
            err,
            BlueprintError::InvalidDescriptor {
                descriptor: "(q,20,0,0,0,19)".into(),
                fault: DescriptorFault::Oversized {
                    points: 20,
                    capacity: 5
                },
            }
        );
    }

    #[test]
    fn endpoint_outside_its_shape() {
        let err = Blueprint::decode("40¬(q,5,0,0,0,9)‡").unwrap_err();
        assert_eq!(
            err,
            BlueprintError::InvalidDescriptor {
                descriptor: "(q,5,0,0,0,9)".into(),
                fault: DescriptorFault::OutOfShape {
                    point: vec![0, 9],
                    extents: vec![1, 5],
                },
            }
        );
        assert!(Blueprint::decode("40¬(q,2,2,2,0,0,0,2,0,0)‡").is_err());
    }

    #[test]
    fn empty_descriptor_between_separators() {
        let err = Blueprint::decode("40¬(q,20,0,0,0,19)§‡").unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::InvalidDescriptor {
                fault: DescriptorFault::Unbracketed,
                ..
            }
        ));
    }
}
