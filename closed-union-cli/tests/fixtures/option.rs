//! A generic union without serialization.

#[closed_union::union]
pub mod option {
    pub struct Some<TValue> {
        pub value: TValue,
    }

    pub struct None;
}
