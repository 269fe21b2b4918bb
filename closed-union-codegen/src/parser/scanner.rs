//! Declaration scanner.
//!
//! Walks the direct members of a union module and classifies each one. Case
//! structs are normalized into [`CaseType`]s; everything else is kept as a
//! helper and re-emitted in place.

use syn::spanned::Spanned;
use syn::{Fields, Item, ItemMod};

use super::attributes::{member_marker, strip_member_markers, MemberMarker};
use crate::error::ScanError;
use crate::ir::CaseType;

/// Classification of a module member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// A struct with named fields or no fields.
    Case,
    /// Any other item, or a struct marked `#[union(skip)]`.
    Helper,
    /// A struct that cannot be a case and is not marked as a helper.
    Malformed,
}

impl Eligibility {
    pub fn of(item: &Item) -> Self {
        let Item::Struct(item) = item else {
            return Self::Helper;
        };

        match member_marker(&item.attrs) {
            MemberMarker::Skip => Self::Helper,
            MemberMarker::Unsupported(_) => Self::Malformed,
            MemberMarker::Unmarked => match item.fields {
                Fields::Named(_) | Fields::Unit => Self::Case,
                Fields::Unnamed(_) => Self::Malformed,
            },
        }
    }
}

/// A member of the scanned module, in source order.
#[derive(Debug, Clone)]
pub enum Member {
    /// Index into [`ScannedModule::cases`].
    Case(usize),
    /// Helper item, emitted unchanged apart from stripped markers.
    Helper(Item),
}

/// Result of scanning one union module.
#[derive(Debug, Clone, Default)]
pub struct ScannedModule {
    pub cases: Vec<CaseType>,
    pub members: Vec<Member>,
}

/// Scanner over the inline body of a union module.
pub struct DeclarationScanner;

impl DeclarationScanner {
    pub fn scan(module: &ItemMod) -> Result<ScannedModule, ScanError> {
        let Some((_, items)) = &module.content else {
            return Err(ScanError::ExternalModule {
                span: module.span(),
            });
        };

        let mut scanned = ScannedModule::default();

        for item in items {
            match Eligibility::of(item) {
                Eligibility::Case => {
                    if let Item::Struct(item) = item {
                        let case = CaseType::from_struct(item);
                        tracing::trace!(case = %case.name, args = case.args.len(), "classified case");
                        scanned.members.push(Member::Case(scanned.cases.len()));
                        scanned.cases.push(case);
                    }
                }
                Eligibility::Helper => {
                    let mut item = item.clone();
                    if let Item::Struct(helper) = &mut item {
                        strip_member_markers(&mut helper.attrs);
                    }
                    scanned.members.push(Member::Helper(item));
                }
                Eligibility::Malformed => return Err(malformed(item)),
            }
        }

        Ok(scanned)
    }
}

fn malformed(item: &Item) -> ScanError {
    match item {
        Item::Struct(item) => match member_marker(&item.attrs) {
            MemberMarker::Unsupported(span) => ScanError::MemberAttribute {
                case: item.ident.to_string(),
                span,
            },
            _ => ScanError::TupleCase {
                case: item.ident.to_string(),
                span: item.fields.span(),
            },
        },
        other => ScanError::MemberAttribute {
            case: String::new(),
            span: other.span(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_eligibility() {
        let named: Item = parse_quote!(pub struct Number { value: String });
        let unit: Item = parse_quote!(pub struct Plus;);
        let braces: Item = parse_quote!(pub struct Minus {});
        let tuple: Item = parse_quote!(pub struct Pair(u8, u8););
        let skipped: Item = parse_quote! {
            #[union(skip)]
            pub struct Scratch(u8);
        };
        let function: Item = parse_quote!(pub fn helper() {});
        let nested_enum: Item = parse_quote!(enum Inner { A });

        assert_eq!(Eligibility::of(&named), Eligibility::Case);
        assert_eq!(Eligibility::of(&unit), Eligibility::Case);
        assert_eq!(Eligibility::of(&braces), Eligibility::Case);
        assert_eq!(Eligibility::of(&tuple), Eligibility::Malformed);
        assert_eq!(Eligibility::of(&skipped), Eligibility::Helper);
        assert_eq!(Eligibility::of(&function), Eligibility::Helper);
        assert_eq!(Eligibility::of(&nested_enum), Eligibility::Helper);
    }

    #[test]
    fn test_scan_keeps_source_order() {
        let module: ItemMod = parse_quote! {
            pub mod token_kind {
                pub struct Number { pub value: String }
                pub fn helper() -> u8 { 1 }
                pub struct Plus;
                #[union(skip)]
                pub struct Scratch;
                pub struct Minus;
            }
        };

        let scanned = DeclarationScanner::scan(&module).unwrap();
        let names: Vec<String> = scanned.cases.iter().map(|c| c.name.to_string()).collect();
        assert_eq!(names, ["Number", "Plus", "Minus"]);

        assert_eq!(scanned.members.len(), 5);
        assert!(matches!(scanned.members[0], Member::Case(0)));
        assert!(matches!(scanned.members[1], Member::Helper(Item::Fn(_))));
        assert!(matches!(scanned.members[2], Member::Case(1)));
        assert!(matches!(scanned.members[4], Member::Case(2)));
    }

    #[test]
    fn test_scan_strips_skip_marker() {
        let module: ItemMod = parse_quote! {
            mod shapes {
                #[derive(Debug)]
                #[union(skip)]
                struct Scratch(u8);
            }
        };

        let scanned = DeclarationScanner::scan(&module).unwrap();
        assert!(scanned.cases.is_empty());
        match &scanned.members[0] {
            Member::Helper(Item::Struct(item)) => {
                assert_eq!(item.attrs.len(), 1);
                assert!(item.attrs[0].path().is_ident("derive"));
            }
            other => panic!("expected helper struct, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_rejects_tuple_case() {
        let module: ItemMod = parse_quote! {
            mod shapes {
                pub struct Point(i32, i32);
            }
        };

        let err = DeclarationScanner::scan(&module).unwrap_err();
        assert!(matches!(err, ScanError::TupleCase { ref case, .. } if case == "Point"));
    }

    #[test]
    fn test_scan_rejects_unknown_member_attribute() {
        let module: ItemMod = parse_quote! {
            mod shapes {
                #[union(rename = "Dot")]
                pub struct Point { x: i32 }
            }
        };

        let err = DeclarationScanner::scan(&module).unwrap_err();
        assert!(matches!(err, ScanError::MemberAttribute { .. }));
    }

    #[test]
    fn test_scan_rejects_external_module() {
        let module: ItemMod = parse_quote!(mod shapes;);
        let err = DeclarationScanner::scan(&module).unwrap_err();
        assert!(matches!(err, ScanError::ExternalModule { .. }));
    }
}
