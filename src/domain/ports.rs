use crate::utils::error::Result;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn output_file(&self) -> &str;
}
