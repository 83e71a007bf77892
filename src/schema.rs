//! Declarative section/field schema for the intake questionnaire
//!
//! One canonical description of the 12 sections consumed uniformly by the
//! renderer and the exporter. Field keys are the stable identifiers that
//! appear in the Markdown export; labels and placeholders are display-only.

/// Kind of input a field accepts
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Free text, multiline, no validation
    Text { placeholder: &'static str },
    /// Single choice from a fixed option set; first option is the implied default
    Radio { options: &'static [&'static str] },
    /// Boolean flag, defaults to false
    Checkbox,
    /// Zero or more options, selection order preserved
    MultiSelect { options: &'static [&'static str] },
}

/// A single field declaration within a section
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// One of the 12 topical sections of the form
#[derive(Debug, Clone)]
pub struct SectionSpec {
    /// Stable identifier ("Section 1" .. "Section 12"), used as the state key
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl SectionSpec {
    /// The field an assistant reply is inserted into: the section's first
    /// free-text field, or none if the section has no text field.
    pub fn assistant_target(&self) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| matches!(f.kind, FieldKind::Text { .. }))
    }
}

const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::Text { placeholder },
    }
}

const fn radio(
    key: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::Radio { options },
    }
}

const fn checkbox(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::Checkbox,
    }
}

const fn multi(
    key: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::MultiSelect { options },
    }
}

/// The full questionnaire, in page order
pub static SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "Section 1",
        title: "General Context",
        fields: &[
            text("app_name", "App Name", "e.g., Framingham Risk Calculator"),
            text(
                "purpose",
                "Purpose & Value",
                "e.g., Estimates 10-year cardiovascular risk using the Framingham equation to guide statin therapy decisions.",
            ),
            radio(
                "user_type",
                "Intended User",
                &["Clinician", "Researcher", "Patient", "Admin", "Other"],
            ),
            text("explain_user", "User Description / Details", ""),
        ],
    },
    SectionSpec {
        id: "Section 2",
        title: "Core Logic & Computation",
        fields: &[
            multi(
                "method",
                "Underlying Method or Model",
                &[
                    "Clinical Guideline",
                    "Rule-based Logic",
                    "Statistical Model",
                    "ML Model",
                    "LLM",
                    "RAG",
                ],
            ),
            text(
                "model_logic",
                "Model Logic or Source",
                "e.g., Logistic regression using systolic BP, age, and smoking status.",
            ),
            text(
                "preprocessing",
                "Input Formatting & Preprocessing",
                "e.g., Convert lbs to kg, ensure LDL is in mg/dL, impute missing values.",
            ),
        ],
    },
    SectionSpec {
        id: "Section 3",
        title: "Inputs & Data Entry",
        fields: &[
            text(
                "input_list",
                "List User Inputs",
                "e.g., Age (18-89), LDL (mg/dL), Smoker (Yes/No)",
            ),
            multi(
                "upload_types",
                "Supported Upload Types",
                &["CSV", "JSON", "PDF", "Image"],
            ),
            text(
                "upload_schema",
                "Expected Schema / Format",
                "e.g., CSV with columns: age, smoker, sbp, hdl",
            ),
        ],
    },
    SectionSpec {
        id: "Section 4",
        title: "Outputs",
        fields: &[
            multi(
                "output_types",
                "Output Types",
                &[
                    "Score",
                    "Recommendation",
                    "Chart",
                    "Table",
                    "Overlay Image",
                    "PDF/CSV/JSON",
                ],
            ),
            text(
                "output_detail",
                "Output Description",
                "e.g., Score between 0-1 with interpretation: <0.2 Low, 0.2-0.7 Moderate, >0.7 High risk.",
            ),
        ],
    },
    SectionSpec {
        id: "Section 5",
        title: "Imaging & Overlays",
        fields: &[
            multi("image_formats", "Input Image Formats", &["JPG", "PNG", "DICOM"]),
            text(
                "image_preprocessing",
                "Preprocessing Steps",
                "e.g., Resize to 224x224, convert to grayscale, normalize pixel values.",
            ),
            multi(
                "output_overlays",
                "Output Overlays",
                &["Bounding Boxes", "Heatmaps", "Labels"],
            ),
            text(
                "overlay_description",
                "Visual Output Experience",
                "e.g., Display bounding boxes around detected lesions with confidence scores.",
            ),
        ],
    },
    SectionSpec {
        id: "Section 6",
        title: "Storage & History",
        fields: &[
            radio(
                "storage_mode",
                "Storage Mode",
                &["Stateless", "Session-based", "Persistent"],
            ),
            text(
                "storage_logic",
                "Storage Logic",
                "e.g., Store session results temporarily; allow optional download as CSV.",
            ),
        ],
    },
    SectionSpec {
        id: "Section 7",
        title: "Document Processing or RAG",
        fields: &[
            multi("doc_formats", "Document Formats", &["PDF", "DOCX", "JSON"]),
            radio("embed_docs", "Embed Docs at Runtime?", &["Yes", "No"]),
            text("embedding_model", "Embedding Model", "e.g., all-MiniLM-L6-v2"),
            multi(
                "vector_db",
                "Vector DB",
                &["FAISS", "Chroma", "Weaviate", "Pinecone"],
            ),
            text(
                "rag_logic",
                "RAG Logic",
                "e.g., Chunk documents by headings; embed on upload; query with top_k=3",
            ),
        ],
    },
    SectionSpec {
        id: "Section 8",
        title: "Protocol & Integration Context",
        fields: &[
            radio("app_type", "App Type", &["Streamlit", "FastAPI", "MCP", "A2A"]),
            multi(
                "mcp_fields",
                "MCP Context Fields",
                &["Patient", "Labs", "Problems", "Encounter"],
            ),
            text("a2a_role", "A2A Role", "e.g., Retriever, Planner, Summarizer"),
            text(
                "agent_io",
                "Agent IO Schema",
                "e.g., Input: {labs, age}; Output: plan_summary",
            ),
        ],
    },
    SectionSpec {
        id: "Section 9",
        title: "External APIs & Secrets",
        fields: &[
            text(
                "apis_used",
                "External APIs Used",
                "e.g., OpenAI for text generation, ClinicalTrials.gov for research data",
            ),
            text("secrets", "Secrets Required", "e.g., OPENAI_API_KEY, DICOM_API_SECRET"),
            text(
                "auth_error",
                "Authentication & Error Handling",
                "e.g., Use API key via header, retry up to 3x with exponential backoff",
            ),
        ],
    },
    SectionSpec {
        id: "Section 10",
        title: "UI/UX & Branding",
        fields: &[
            checkbox("logo", "Include Logo?"),
            checkbox("sidebar_nav", "Use Sidebar Navigation?"),
            checkbox("custom_css", "Use Custom CSS?"),
            text(
                "ui_notes",
                "Layout and Style Notes",
                "e.g., Show summary in sidebar, use tabs for each stage, apply clean clinical colors",
            ),
        ],
    },
    SectionSpec {
        id: "Section 11",
        title: "README Metadata",
        fields: &[
            text(
                "readme_use",
                "Use Case",
                "e.g., Primary care clinicians assessing cardiovascular risk",
            ),
            text(
                "readme_limit",
                "Limitations",
                "e.g., Not validated for patients under 18 or with incomplete labs",
            ),
            text(
                "readme_refs",
                "Evidence or References",
                "e.g., Wilson et al. 1998 Framingham Heart Study",
            ),
            text(
                "readme_owner",
                "Owner's Insight",
                "e.g., Built during pilot with Health Universe for risk tool validation",
            ),
        ],
    },
    SectionSpec {
        id: "Section 12",
        title: "Privacy & Compliance",
        fields: &[
            radio("handles_phi", "Handles PHI/PII?", &["Yes", "No"]),
            radio("anonymize", "Requires Anonymization?", &["Yes", "No"]),
            multi("compliance", "Compliance Standards", &["HIPAA", "GDPR", "Other"]),
            text(
                "privacy_notes",
                "Privacy Measures",
                "e.g., Mask names and MRNs, encrypt stored outputs, restrict access to authorized users",
            ),
        ],
    },
];

/// Number of sections in the questionnaire
pub fn section_count() -> usize {
    SECTIONS.len()
}
