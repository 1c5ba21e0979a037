pub trait Encryptor {
    fn encrypt(&self, message: &str) -> String;
}

pub trait Decryptor {
    fn decrypt(&self, message: &str) -> String;
}
