use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_connector_core::{
    events::{FormEvent, SendEvent, SuggestionEvent, UiEvent},
    types::{ActionState, Device, FormField, NotificationKind, SendOutcome, SendState},
    App, DelayOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<FormEvent>()?;
    gen.register_type::<SuggestionEvent>()?;
    gen.register_type::<SendEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<Device>()?;
    gen.register_type::<FormField>()?;
    gen.register_type::<ActionState>()?;
    gen.register_type::<SendState>()?;
    gen.register_type::<SendOutcome>()?;
    gen.register_type::<NotificationKind>()?;
    gen.register_type::<DelayOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
