//! Generic parameters of the union enum.
//!
//! The enum must be generic over every parameter any of its cases uses. The
//! merged list keeps lifetimes first, then type and const parameters in the
//! order they first appear; a parameter shared by several cases appears once
//! and carries the union of its bounds.

use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{GenericParam, Generics, Ident, LifetimeParam, WhereClause, WherePredicate};

use crate::tokens::compact;

/// Merge the generics of several declarations, in order.
pub fn merge<'a>(sources: impl IntoIterator<Item = &'a Generics>) -> Generics {
    let mut lifetimes: Vec<LifetimeParam> = Vec::new();
    let mut others: Vec<GenericParam> = Vec::new();
    let mut predicates: Vec<WherePredicate> = Vec::new();

    for generics in sources {
        for param in &generics.params {
            match param {
                GenericParam::Lifetime(lifetime) => {
                    match lifetimes
                        .iter_mut()
                        .find(|existing| existing.lifetime.ident == lifetime.lifetime.ident)
                    {
                        Some(existing) => extend_unique(&mut existing.bounds, &lifetime.bounds),
                        None => lifetimes.push(lifetime.clone()),
                    }
                }
                GenericParam::Type(ty) => {
                    match others.iter_mut().find(|existing| param_ident(existing) == &ty.ident) {
                        Some(GenericParam::Type(existing)) => {
                            extend_unique(&mut existing.bounds, &ty.bounds)
                        }
                        Some(_) => {}
                        None => others.push(param.clone()),
                    }
                }
                GenericParam::Const(constant) => {
                    if !others.iter().any(|existing| param_ident(existing) == &constant.ident) {
                        others.push(param.clone());
                    }
                }
            }
        }

        if let Some(where_clause) = &generics.where_clause {
            for predicate in &where_clause.predicates {
                let text = compact(predicate);
                if !predicates.iter().any(|existing| compact(existing) == text) {
                    predicates.push(predicate.clone());
                }
            }
        }
    }

    let params: Punctuated<GenericParam, _> = lifetimes
        .into_iter()
        .map(GenericParam::Lifetime)
        .chain(others)
        .collect();
    let has_params = !params.is_empty();

    Generics {
        lt_token: has_params.then(Default::default),
        params,
        gt_token: has_params.then(Default::default),
        where_clause: (!predicates.is_empty()).then(|| WhereClause {
            where_token: Default::default(),
            predicates: predicates.into_iter().collect(),
        }),
    }
}

/// `<_, _>` style placeholder list, `'_` for lifetimes.
pub fn placeholders(generics: &Generics) -> String {
    if generics.params.is_empty() {
        return String::new();
    }

    let slots: Vec<&str> = generics
        .params
        .iter()
        .map(|param| match param {
            GenericParam::Lifetime(_) => "'_",
            GenericParam::Type(_) | GenericParam::Const(_) => "_",
        })
        .collect();
    format!("<{}>", slots.join(", "))
}

/// Identifiers of the type parameters, in order.
pub fn type_params(generics: &Generics) -> Vec<&Ident> {
    generics.type_params().map(|param| &param.ident).collect()
}

fn param_ident(param: &GenericParam) -> &Ident {
    match param {
        GenericParam::Lifetime(lifetime) => &lifetime.lifetime.ident,
        GenericParam::Type(ty) => &ty.ident,
        GenericParam::Const(constant) => &constant.ident,
    }
}

fn extend_unique<T, P>(target: &mut Punctuated<T, P>, extra: &Punctuated<T, P>)
where
    T: ToTokens + Clone,
    P: Default,
{
    for item in extra {
        let text = compact(item);
        if !target.iter().any(|existing| compact(existing) == text) {
            target.push(item.clone());
        }
    }
}
