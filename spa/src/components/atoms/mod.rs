pub mod input_text;
pub mod safe_html;
