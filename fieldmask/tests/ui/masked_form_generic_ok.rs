use fieldmask::{IntegerOnly, MaskedForm};

#[derive(MaskedForm)]
struct Linha<T, U: Clone> {
    #[mask(IntegerOnly)]
    quantidade: T,
    descricao: U,
}

fn main() {
    let _ = Linha {
        quantidade: Box::new(String::from("12")),
        descricao: 3_u8,
    }
    .masked();
}
