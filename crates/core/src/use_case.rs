use async_trait::async_trait;

/// One application operation. Each implementor fixes its own input, output
/// and error types.
#[async_trait]
pub trait UseCase: Send + Sync {
    // borrowed across an await point by `validate_and_execute`
    type Input: Send + Sync + 'static;
    type Output: Send + 'static;
    type Error: Send + 'static;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A use case whose input is checked before it runs.
#[async_trait]
pub trait UseCaseValidatable: UseCase {
    async fn validate(&self, input: &Self::Input) -> Result<(), Self::Error>;

    async fn validate_and_execute(
        &self,
        input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        self.validate(&input).await?;
        self.execute(input).await
    }
}
