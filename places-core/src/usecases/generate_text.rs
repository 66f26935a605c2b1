use super::prelude::*;

pub fn generate_text<L>(llm: &L, prompt: &str) -> Result<String>
where
    L: LanguageModelGateway + ?Sized,
{
    if prompt.is_empty() {
        return Err(Error::EmptyPrompt);
    }
    Ok(llm.generate(prompt)?)
}
