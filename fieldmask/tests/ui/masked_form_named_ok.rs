use fieldmask::{DocumentNumber, MaskedForm, PostalCode};

#[derive(MaskedForm)]
struct Cliente {
    nome: String,
    #[mask(DocumentNumber)]
    cpf: String,
    #[mask(PostalCode)]
    cep: Option<String>,
    idade: u8,
}

fn main() {
    let cliente = Cliente {
        nome: String::new(),
        cpf: String::new(),
        cep: None,
        idade: 0,
    }
    .masked();
    let _ = (cliente.nome, cliente.cpf, cliente.cep, cliente.idade);
}
