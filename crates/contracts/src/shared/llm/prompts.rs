//! Prompt templates sent to the model

/// Системная инструкция для обоих вызовов
pub const SYSTEM_INSTRUCTION: &str = r#"
You are an expert Frontend engineer specialised in Tailwind CSS.
Your goal is to convert UI sketches (hand-drawn or wireframes) into production-ready, responsive and beautiful HTML/CSS code.

RULES:
1. Produce a single HTML file containing all necessary CSS and JS.
2. ALWAYS load Tailwind CSS via CDN: <script src="https://cdn.tailwindcss.com"></script>.
3. Use FontAwesome for icons when needed: <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">.
4. Use Google Fonts (Inter or Roboto) for typography.
5. Use "https://picsum.photos/id/{random_id}/200/300" for placeholder images.
6. The design should be modern, clean and spacious.
7. Return ONLY the raw HTML code. Do not wrap it in markdown code blocks (no ```html).
8. The layout must be responsive (mobile-first).
"#;

/// Инструкция пользователя по умолчанию для генерации по эскизу
pub const DEFAULT_SKETCH_PROMPT: &str = "Turn this sketch into a working HTML/Tailwind website.";

/// Составной промпт доработки: текущий HTML целиком плюс инструкция пользователя
pub fn refine_prompt(current_html: &str, instruction: &str) -> String {
    format!(
        "Here is the current HTML code:\n\
         {current_html}\n\
         \n\
         User Instruction: {instruction}\n\
         \n\
         Update the code according to the instruction. Keep the existing structure unless asked to change it.\n\
         Return ONLY the updated raw HTML code. No markdown.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refine_prompt_embeds_code_and_instruction() {
        let prompt = refine_prompt("<div>hi</div>", "make it red");
        assert!(prompt.contains("Here is the current HTML code:\n<div>hi</div>\n"));
        assert!(prompt.contains("User Instruction: make it red\n"));
        assert!(prompt.contains("Keep the existing structure"));
    }

    #[test]
    fn test_system_instruction_pins_stack() {
        assert!(SYSTEM_INSTRUCTION.contains("https://cdn.tailwindcss.com"));
        assert!(SYSTEM_INSTRUCTION.contains("font-awesome/6.4.0"));
        assert!(SYSTEM_INSTRUCTION.contains("https://picsum.photos/id/{random_id}/200/300"));
    }
}
