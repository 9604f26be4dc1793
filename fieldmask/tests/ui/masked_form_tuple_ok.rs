use fieldmask::{MaskedForm, PhoneNumber};

#[derive(MaskedForm)]
struct Telefones(#[mask(PhoneNumber)] Vec<String>, u32);

fn main() {
    let _ = Telefones(Vec::new(), 0).masked();
}
