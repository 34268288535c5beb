//! Prompt templates for the three label tasks.
//!
//! System prompts are fixed; user prompts are parameterized by request
//! fields only. Nothing here touches the network.

use label_common::rpc::GenerateDesignRequest;

pub const EXTRACTION_SYSTEM_PROMPT: &str = "\
You are an AI assistant specialized in extracting technical specifications from product descriptions for lighting products.

Extract the following specifications if present:
- powerInput: Power input voltage and type (e.g., \"240V AC 50Hz\", \"12V DC\")
- temperatureRating: Operating temperature range (e.g., \"-20\u{b0}C to +40\u{b0}C\")
- ipRating: IP rating (e.g., \"IP65\", \"IP44\")
- classRating: Electrical class rating (e.g., \"Class I\", \"Class II\")
- cctOptions: Color temperature options if selectable (e.g., \"3000K / 4000K / 5700K\")
- powerOptions: Power wattage options if selectable (e.g., \"40W / 50W / 60W\")
- additionalSpecs: Any other relevant specifications as key-value pairs

Return a JSON object with the extracted specifications. Only include fields where you found explicit information.
If a specification is not mentioned, don't include it in the response.";

pub const SUGGESTION_SYSTEM_PROMPT: &str = "\
You are an AI assistant that suggests the most appropriate label template type for lighting products.

Available template types:
- standard: Basic product label with barcode and product info
- cct_selectable: For products with color temperature selection (3000K/4000K/5700K)
- power_selectable: For products with selectable power/wattage options
- emergency: For emergency lighting products with battery backup

Analyze the product information and suggest the most appropriate template type.
Return a JSON object with: template_type, confidence (0-1), and reason.";

pub const DESIGN_SYSTEM_PROMPT: &str = "\
You are an AI assistant specialized in generating label layout designs for lighting products.

Generate label layout variations that are:
- Professional and compliant with industry standards
- Clear and readable with proper hierarchy
- Suitable for printing at 300 DPI
- Following Australian electrical product labeling guidelines

For each variation, suggest specific element placements including:
- Product name and code positioning
- Barcode placement and size
- Specification text layout
- Safety symbols and compliance marks
- Company branding areas

Return a JSON object with an array of \"variations\", each containing:
- layout_type: \"grid\", \"centered\", \"left_aligned\", \"modern\", \"compact\"
- description: Brief description of the design approach
- elements: Array of element objects with type, x, y, width, height, fontSize, text content
- confidence: 0-1 confidence score

Element types: \"text\", \"barcode\", \"rectangle\", \"line\", \"symbol\"
Coordinates should be relative to canvas dimensions provided.";

pub fn extraction_user_prompt(text: &str, product_type: Option<&str>) -> String {
    format!(
        "Product Type: {}\n\nText to analyze:\n{}\n\nExtract all technical specifications from this text.",
        product_type.unwrap_or("Not specified"),
        text
    )
}

/// Product name and description lines are appended only when present.
pub fn suggestion_user_prompt(
    product_type: &str,
    product_name: Option<&str>,
    description: Option<&str>,
) -> String {
    let mut context = format!("Product Type: {}", product_type);
    if let Some(name) = product_name {
        context.push_str(&format!("\nProduct Name: {}", name));
    }
    if let Some(desc) = description {
        context.push_str(&format!("\nDescription: {}", desc));
    }
    context
}

pub fn design_user_prompt(request: &GenerateDesignRequest) -> String {
    let specs = serde_json::to_string_pretty(&request.specifications)
        .unwrap_or_else(|_| "{}".to_string());

    format!(
        "Canvas dimensions: {}x{}px\nTemplate type: {}\nProduct: {} ({})\n\nSpecifications to include:\n{}\n\nGenerate {} design variations optimized for this product type.",
        request.canvas_width,
        request.canvas_height,
        request.template_type,
        request.product_name,
        request.product_code,
        specs,
        request.num_variations
    )
}
