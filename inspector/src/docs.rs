//! Markdown reference of a packet catalog.

use std::fmt::{self, Write};

use mu_protocol::{Catalog, FieldSpec, GroupSpec, PacketDescriptor, Stride};

/// Renders every descriptor of `catalog`, grouped by event.
///
/// Without `include_variants` only the layout of the newest client build is
/// listed for each event.
pub fn render_catalog(catalog: &Catalog, include_variants: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# Packets {}\n", catalog.direction)?;
    writeln!(
        out,
        "{} descriptors for {} events.\n",
        catalog.len(),
        catalog.events().len()
    )?;

    for event in catalog.events() {
        let variants = catalog.variants(event);
        let layouts = variants.variants();
        let shown: &[&PacketDescriptor] = if include_variants {
            layouts
        } else {
            &layouts[layouts.len().saturating_sub(1)..]
        };
        for descriptor in shown {
            render_packet(&mut out, descriptor)?;
        }
    }
    Ok(out)
}

pub fn render_packet<W: Write>(out: &mut W, descriptor: &PacketDescriptor) -> fmt::Result {
    writeln!(out, "## {} ({})\n", descriptor.name, descriptor.header)?;
    if descriptor.name != descriptor.event {
        writeln!(
            out,
            "Layout of `{}` for clients since {}.\n",
            descriptor.event, descriptor.since
        )?;
    }
    match descriptor.length {
        Some(length) => writeln!(out, "Length: {} bytes.\n", length)?,
        None => writeln!(
            out,
            "Length: variable, at least {} bytes.\n",
            descriptor.min_size()
        )?,
    }
    if !descriptor.sent_when.is_empty() {
        writeln!(out, "Sent when: {}\n", descriptor.sent_when)?;
    }
    if !descriptor.caused_reaction.is_empty() {
        writeln!(out, "Caused reaction: {}\n", descriptor.caused_reaction)?;
    }

    render_fields(out, descriptor.fields)?;
    for group in descriptor.groups {
        render_group(out, group, 3)?;
    }
    Ok(())
}

fn render_fields<W: Write>(out: &mut W, fields: &[FieldSpec]) -> fmt::Result {
    if fields.is_empty() {
        return Ok(());
    }
    out.write_str("| Offset | Name | Encoding | Values |\n")?;
    out.write_str("|---|---|---|---|\n")?;
    for field in fields {
        let values = field
            .labels
            .map(|def| {
                def.variants
                    .iter()
                    .map(|(raw, label)| format!("{raw} {label}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            field.offset, field.name, field.encoding, values
        )?;
    }
    out.write_char('\n')
}

fn render_group<W: Write>(out: &mut W, group: &GroupSpec, level: usize) -> fmt::Result {
    let stride = match group.stride {
        Stride::Fixed(size) => format!("{size} bytes per element"),
        Stride::Dynamic { base } => format!("{base} bytes per element plus nested elements"),
    };
    writeln!(
        out,
        "{} {} (offset {}, count in `{}`, {})\n",
        "#".repeat(level),
        group.name,
        group.offset,
        group.count_field,
        stride
    )?;
    render_fields(out, group.fields)?;
    for nested in group.nested {
        render_group(out, nested, level + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mu_protocol::catalog;

    #[test]
    fn test_renders_header_and_labels() {
        let mut out = String::new();
        render_packet(&mut out, catalog::SERVER.by_name("LoginResponse").unwrap()).unwrap();
        assert!(out.starts_with("## LoginResponse (C1 F1 01)"));
        assert!(out.contains("Length: 5 bytes."));
        assert!(out.contains("| 4 | Success | u8 |"));
        assert!(out.contains("Sent when: "));
    }

    #[test]
    fn test_renders_nested_groups() {
        let mut out = String::new();
        render_packet(&mut out, catalog::SERVER.by_name("AddCharactersToScope").unwrap()).unwrap();
        assert!(out.contains("### Characters (offset 5, count in `CharacterCount`"));
        assert!(out.contains("#### Effects"));
    }

    #[test]
    fn test_variant_filter() {
        let all = render_catalog(&catalog::SERVER, true).unwrap();
        let newest = render_catalog(&catalog::SERVER, false).unwrap();
        assert!(all.contains("## CharacterList075 "));
        assert!(!newest.contains("## CharacterList075 "));
        assert!(newest.contains("## CharacterList "));
    }
}
