use crate::domain::model::Contact;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn contacts_path(&self) -> Option<&str>;
    fn initial_query(&self) -> &str;
    fn output_format(&self) -> &str;
}

#[async_trait]
pub trait ContactSource: Send + Sync {
    fn name(&self) -> String;
    async fn load(&self) -> Result<Vec<Contact>>;
}
