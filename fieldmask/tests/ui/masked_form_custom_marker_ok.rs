use fieldmask::{MaskMarker, MaskPolicy, MaskedForm};

mod markers {
    use fieldmask::{MaskMarker, MaskPolicy};

    pub struct Peso;

    impl MaskMarker for Peso {
        const CLASS: &'static str = "js-peso";

        fn policy() -> MaskPolicy {
            MaskPolicy::decimal_guarded(Some(3), false)
        }
    }
}

#[derive(MaskedForm)]
struct Produto {
    #[mask(markers::Peso)]
    peso: String,
}

fn main() {
    assert_eq!(<markers::Peso as MaskMarker>::CLASS, "js-peso");
    let _: MaskPolicy = <markers::Peso as MaskMarker>::policy();
    let _ = Produto { peso: String::new() }.masked();
}
