//! Built-in template catalog.
//!
//! | Id | Industry | Notable |
//! |----|----------|---------|
//! | `standard` | General business | Generic fallback for unknown ids |
//! | `modern` | Startups, agencies | Header band, striped table |
//! | `minimal` | Any | No borders, ISO dates |
//! | `corporate` | Enterprise | Net 45, tax summary, signature |
//! | `creative` | Design studios | Project summary |
//! | `freelancer` | Independent contractors | Hourly columns |
//! | `consulting` | Advisory firms | Project summary, signature |
//! | `medical` | Clinics, practices | Patient vocabulary, insurance section |
//! | `legal` | Law firms | Matter summary, trust account terms |
//! | `construction` | Contractors | Job site details, two signatures |
//! | `hospitality` | Venues, catering | 18% service charge, taxed |
//! | `photography` | Photographers | Session details, usage rights |
//! | `saas` | Software subscriptions | Seats, subscription details |
//! | `retail` | Shops | Shipping details, always shows shipping |
//! | `real-estate` | Property management | Property details |
//! | `education` | Schools, tutors | Student vocabulary |
//! | `nonprofit` | Charities | Program impact notes |
//! | `logistics` | Freight carriers | Consignee vocabulary, shipping |
//! | `automotive` | Repair shops | Vehicle details, warranty terms |

use rust_decimal::Decimal;

use super::{ChargePolicy, Labels, PlaceholderItem, StyleDefaults, TemplateDescriptor};
use crate::defaults::Field;
use crate::sections::SectionKind::{self, *};
use crate::style::{CornerRadius, Layout, LogoPosition, TableStyle};

/// All built-in templates, in gallery order.
pub const TEMPLATES: &[&TemplateDescriptor] = &[
    &STANDARD,
    &MODERN,
    &MINIMAL,
    &CORPORATE,
    &CREATIVE,
    &FREELANCER,
    &CONSULTING,
    &MEDICAL,
    &LEGAL,
    &CONSTRUCTION,
    &HOSPITALITY,
    &PHOTOGRAPHY,
    &SAAS,
    &RETAIL,
    &REAL_ESTATE,
    &EDUCATION,
    &NONPROFIT,
    &LOGISTICS,
    &AUTOMOTIVE,
];

/// Percent from hundredths: `pct(1850)` is 18.50%.
const fn pct(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

const LONG_DATE: &str = "%B %-d, %Y";

const SAMPLE_SERVICE: &[PlaceholderItem] = &[PlaceholderItem {
    description: "Professional services",
    quantity: "1",
    rate: "150.00",
    amount: "150.00",
}];

const NO_SECTIONS_HIDDEN: &[SectionKind] = &[];
const NO_TITLES: &[(SectionKind, &str)] = &[];

// ============================================================================
// GENERAL PURPOSE
// ============================================================================

pub const STANDARD: TemplateDescriptor = TemplateDescriptor {
    id: "standard",
    name: "Standard",
    industry: "General business",
    style: StyleDefaults {
        corner_radius: CornerRadius::Medium,
        logo_position: LogoPosition::Right,
        table_style: TableStyle::Bordered,
        layout: Layout::Standard,
        primary: "#1f2937",
        accent: "#3b82f6",
        text: "#111827",
        background: "#ffffff",
        font_family: "Inter",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels::STANDARD,
    fields: &[],
    charges: ChargePolicy::STANDARD,
    skeleton: &[PaymentInformation, Notes, TermsAndConditions, TaxLine, Signature],
    hidden: &[TaxLine, Signature],
    copy: &[],
    titles: NO_TITLES,
    footer: &["Thank you for your business!"],
    date_format: LONG_DATE,
    placeholder_rows: SAMPLE_SERVICE,
};

pub const MODERN: TemplateDescriptor = TemplateDescriptor {
    id: "modern",
    name: "Modern",
    industry: "Startups and agencies",
    style: StyleDefaults {
        corner_radius: CornerRadius::Large,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Striped,
        layout: Layout::Modern,
        primary: "#4f46e5",
        accent: "#a5b4fc",
        text: "#1e1b4b",
        background: "#ffffff",
        font_family: "Poppins",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        total: "Total Due",
        ..Labels::STANDARD
    },
    skeleton: &[PaymentInformation, Notes, TermsAndConditions],
    hidden: NO_SECTIONS_HIDDEN,
    footer: &["Thanks for choosing {{company_name}}."],
    ..STANDARD
};

pub const MINIMAL: TemplateDescriptor = TemplateDescriptor {
    id: "minimal",
    name: "Minimal",
    industry: "Any",
    style: StyleDefaults {
        corner_radius: CornerRadius::None,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Minimal,
        layout: Layout::Minimal,
        primary: "#000000",
        accent: "#9ca3af",
        text: "#111111",
        background: "#ffffff",
        font_family: "Helvetica",
        font_size: 9.5,
        font_weight: 300,
    },
    labels: Labels {
        document_title: "Invoice",
        invoice_number: "No.",
        issue_date: "Date",
        due_date: "Due",
        ..Labels::STANDARD
    },
    skeleton: &[PaymentInformation, Notes],
    hidden: NO_SECTIONS_HIDDEN,
    footer: &["Thank you."],
    date_format: "%Y-%m-%d",
    ..STANDARD
};

pub const CORPORATE: TemplateDescriptor = TemplateDescriptor {
    id: "corporate",
    name: "Corporate",
    industry: "Enterprise and B2B",
    style: StyleDefaults {
        corner_radius: CornerRadius::Small,
        logo_position: LogoPosition::Right,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#0f172a",
        accent: "#0ea5e9",
        text: "#0f172a",
        background: "#ffffff",
        font_family: "Source Sans Pro",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        document_title: "TAX INVOICE",
        bill_to: "Billed To",
        payment_terms: "Payment Terms",
        total: "Amount Due",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Corporation Ltd."),
        (Field::InvoiceNumber, "CORP-0001"),
        (Field::PaymentTerms, "Net 45"),
    ],
    skeleton: &[PaymentInformation, TermsAndConditions, TaxLine, Notes, Signature],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            PaymentInformation,
            &[
                "Remit by wire transfer or ACH to the account on file.",
                "Reference invoice {{invoice_number}} on all remittances.",
            ],
        ),
        (
            TermsAndConditions,
            &[
                "Payment terms: {{payment_terms}} from the invoice date.",
                "Balances outstanding after {{due_date}} accrue interest at 1.5% per month.",
                "Disputes must be raised in writing within 10 business days.",
            ],
        ),
        (Signature, &["Authorized Signatory", "Finance Department"]),
    ],
    footer: &[
        "{{company_name}}",
        "Registered office as stated above.",
    ],
    date_format: "%d %B %Y",
    ..STANDARD
};

// ============================================================================
// PROFESSIONAL SERVICES
// ============================================================================

pub const CREATIVE: TemplateDescriptor = TemplateDescriptor {
    id: "creative",
    name: "Creative Studio",
    industry: "Design and creative services",
    style: StyleDefaults {
        corner_radius: CornerRadius::Large,
        logo_position: LogoPosition::Center,
        table_style: TableStyle::Striped,
        layout: Layout::Modern,
        primary: "#db2777",
        accent: "#f9a8d4",
        text: "#3f3f46",
        background: "#fffafc",
        font_family: "Montserrat",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        bill_to: "Client",
        description: "Deliverable",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Studio Name"),
        (Field::CompanyTagline, "Design that moves people"),
        (Field::ItemDescription, "Design deliverable"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, Notes, TermsAndConditions],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            ProjectSummary,
            &["Creative direction, concept development and final artwork delivery."],
        ),
        (
            TermsAndConditions,
            &[
                "Two rounds of revisions are included; further rounds are billed hourly.",
                "Final files are released once this invoice is paid in full.",
            ],
        ),
    ],
    footer: &["Made with care by {{company_name}}."],
    placeholder_rows: &[PlaceholderItem {
        description: "Brand identity package",
        quantity: "1",
        rate: "1,200.00",
        amount: "1,200.00",
    }],
    ..STANDARD
};

pub const FREELANCER: TemplateDescriptor = TemplateDescriptor {
    id: "freelancer",
    name: "Freelancer",
    industry: "Independent contractors",
    style: StyleDefaults {
        corner_radius: CornerRadius::Medium,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Minimal,
        layout: Layout::Standard,
        primary: "#059669",
        accent: "#6ee7b7",
        text: "#064e3b",
        background: "#ffffff",
        font_family: "Inter",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        description: "Task",
        quantity: "Hours",
        rate: "Hourly Rate",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Name"),
        (Field::PaymentTerms, "Net 15"),
        (Field::ItemDescription, "Development work"),
    ],
    skeleton: &[PaymentInformation, Notes, TermsAndConditions],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[(
        PaymentInformation,
        &[
            "Payment accepted by bank transfer or PayPal.",
            "Please pay within {{payment_terms}} of {{issue_date}}.",
        ],
    )],
    footer: &["Thanks for working with me!"],
    placeholder_rows: &[PlaceholderItem {
        description: "Development work",
        quantity: "10",
        rate: "75.00",
        amount: "750.00",
    }],
    ..STANDARD
};

pub const CONSULTING: TemplateDescriptor = TemplateDescriptor {
    id: "consulting",
    name: "Consulting",
    industry: "Advisory and consulting",
    style: StyleDefaults {
        corner_radius: CornerRadius::Small,
        logo_position: LogoPosition::Right,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#1e3a8a",
        accent: "#93c5fd",
        text: "#1e293b",
        background: "#ffffff",
        font_family: "Lato",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        description: "Engagement",
        quantity: "Hours",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Consulting Firm"),
        (Field::ItemDescription, "Advisory services"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, TermsAndConditions, TaxLine, Signature],
    hidden: &[Signature],
    copy: &[
        (
            ProjectSummary,
            &[
                "Advisory engagement as outlined in the statement of work.",
                "Billing period ending {{issue_date}}.",
            ],
        ),
        (
            TermsAndConditions,
            &[
                "Work is performed under the master services agreement in force.",
                "Expenses are billed at cost without markup.",
            ],
        ),
    ],
    titles: &[(ProjectSummary, "Engagement Summary")],
    ..STANDARD
};

pub const LEGAL: TemplateDescriptor = TemplateDescriptor {
    id: "legal",
    name: "Legal Services",
    industry: "Law firms",
    style: StyleDefaults {
        corner_radius: CornerRadius::None,
        logo_position: LogoPosition::Right,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#111827",
        accent: "#b45309",
        text: "#111827",
        background: "#fffdf7",
        font_family: "Times New Roman",
        font_size: 11.0,
        font_weight: 400,
    },
    labels: Labels {
        document_title: "STATEMENT OF ACCOUNT",
        bill_to: "Client / Matter",
        description: "Legal Service",
        quantity: "Hours",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Law Firm LLP"),
        (Field::InvoiceNumber, "MATTER-0001"),
        (Field::ItemDescription, "Legal research and drafting"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, TermsAndConditions, Signature],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            ProjectSummary,
            &["Professional services rendered in connection with the referenced matter."],
        ),
        (
            TermsAndConditions,
            &[
                "Fees are billed in accordance with the engagement letter.",
                "Trust account funds are applied to outstanding balances first.",
                "Interest accrues on balances unpaid after {{due_date}}.",
            ],
        ),
        (Signature, &["Attorney of Record"]),
    ],
    titles: &[(ProjectSummary, "Matter Summary")],
    footer: &["This statement is confidential and may be privileged."],
    ..STANDARD
};

// ============================================================================
// INDUSTRY
// ============================================================================

pub const MEDICAL: TemplateDescriptor = TemplateDescriptor {
    id: "medical",
    name: "Medical Practice",
    industry: "Healthcare",
    style: StyleDefaults {
        corner_radius: CornerRadius::Medium,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#0e7490",
        accent: "#67e8f9",
        text: "#164e63",
        background: "#ffffff",
        font_family: "Open Sans",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        document_title: "MEDICAL INVOICE",
        from: "Provider",
        bill_to: "Patient Information",
        issue_date: "Date of Service",
        description: "Service / Procedure",
        total: "Patient Balance",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Medical Practice"),
        (Field::ClientName, "Patient Name"),
        (Field::InvoiceNumber, "MED-0001"),
        (Field::PaymentTerms, "Due on receipt"),
        (Field::ItemDescription, "Consultation"),
    ],
    skeleton: &[InsuranceInformation, PaymentInformation, Notes, TermsAndConditions],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            InsuranceInformation,
            &[
                "Claims are filed on the patient's behalf when coverage details are on file.",
                "Any balance not covered by insurance is the patient's responsibility.",
            ],
        ),
        (
            TermsAndConditions,
            &["Questions about this bill? Contact our billing office at {{company_phone}}."],
        ),
    ],
    footer: &["We appreciate the trust you place in our care."],
    date_format: "%m/%d/%Y",
    placeholder_rows: &[PlaceholderItem {
        description: "Consultation",
        quantity: "1",
        rate: "120.00",
        amount: "120.00",
    }],
    ..STANDARD
};

pub const CONSTRUCTION: TemplateDescriptor = TemplateDescriptor {
    id: "construction",
    name: "Construction",
    industry: "Contractors and trades",
    style: StyleDefaults {
        corner_radius: CornerRadius::Small,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#c2410c",
        accent: "#fdba74",
        text: "#292524",
        background: "#ffffff",
        font_family: "Roboto",
        font_size: 10.0,
        font_weight: 500,
    },
    labels: Labels {
        bill_to: "Project Owner",
        description: "Work Performed",
        quantity: "Qty / Hrs",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Construction Co."),
        (Field::ItemDescription, "Labor"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, TermsAndConditions, Signature],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (ProjectSummary, &["Work completed at the job site listed for the project owner."]),
        (
            TermsAndConditions,
            &[
                "Materials remain the property of {{company_name}} until paid in full.",
                "Change orders are billed separately.",
            ],
        ),
        (Signature, &["Contractor Signature", "Owner Signature"]),
    ],
    titles: &[(ProjectSummary, "Job Site Details")],
    ..STANDARD
};

pub const HOSPITALITY: TemplateDescriptor = TemplateDescriptor {
    id: "hospitality",
    name: "Hospitality & Catering",
    industry: "Venues, hotels and catering",
    style: StyleDefaults {
        corner_radius: CornerRadius::Large,
        logo_position: LogoPosition::Center,
        table_style: TableStyle::Striped,
        layout: Layout::Modern,
        primary: "#7c2d12",
        accent: "#fcd34d",
        text: "#431407",
        background: "#fffbeb",
        font_family: "Playfair Display",
        font_size: 10.5,
        font_weight: 400,
    },
    labels: Labels {
        bill_to: "Guest Information",
        description: "Service",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Venue Name"),
        (Field::ClientName, "Guest Name"),
        (Field::ItemDescription, "Catering service"),
    ],
    charges: ChargePolicy {
        service_charge: Some(pct(1800)),
        ..ChargePolicy::STANDARD
    },
    skeleton: &[EventDetails, PaymentInformation, Notes, TermsAndConditions, TaxLine],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            EventDetails,
            &[
                "Event date: {{issue_date}}",
                "A service charge applies to all food and beverage items.",
            ],
        ),
        (
            TermsAndConditions,
            &[
                "Final guest count is due 72 hours before the event.",
                "Deposits are non-refundable within 14 days of the event.",
            ],
        ),
    ],
    footer: &["We look forward to hosting you again."],
    placeholder_rows: &[PlaceholderItem {
        description: "Dinner service (per guest)",
        quantity: "50",
        rate: "45.00",
        amount: "2,250.00",
    }],
    ..STANDARD
};

pub const PHOTOGRAPHY: TemplateDescriptor = TemplateDescriptor {
    id: "photography",
    name: "Photography",
    industry: "Photographers",
    style: StyleDefaults {
        corner_radius: CornerRadius::Medium,
        logo_position: LogoPosition::Center,
        table_style: TableStyle::Minimal,
        layout: Layout::Modern,
        primary: "#18181b",
        accent: "#f472b6",
        text: "#27272a",
        background: "#ffffff",
        font_family: "Raleway",
        font_size: 10.0,
        font_weight: 300,
    },
    labels: Labels {
        description: "Session / Package",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Photography Studio"),
        (Field::ItemDescription, "Photo session"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, TermsAndConditions],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[(
        TermsAndConditions,
        &[
            "Image usage rights transfer upon receipt of full payment.",
            "The 50% retainer is non-refundable.",
        ],
    )],
    titles: &[(ProjectSummary, "Session Details")],
    ..STANDARD
};

pub const SAAS: TemplateDescriptor = TemplateDescriptor {
    id: "saas",
    name: "Software Subscription",
    industry: "SaaS and subscriptions",
    style: StyleDefaults {
        corner_radius: CornerRadius::Large,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Striped,
        layout: Layout::Modern,
        primary: "#6d28d9",
        accent: "#c4b5fd",
        text: "#2e1065",
        background: "#ffffff",
        font_family: "Inter",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        bill_to: "Subscriber Information",
        description: "Plan / Add-on",
        quantity: "Seats",
        rate: "Price / Seat",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Software Inc."),
        (Field::PaymentTerms, "Due on receipt"),
        (Field::ItemDescription, "Subscription"),
    ],
    skeleton: &[SubscriptionDetails, PaymentInformation, Notes, TaxLine],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            SubscriptionDetails,
            &[
                "Billing period begins {{issue_date}}.",
                "Your subscription renews automatically unless cancelled before {{due_date}}.",
            ],
        ),
        (PaymentInformation, &["The card on file is charged automatically."]),
    ],
    footer: &["Manage your subscription from your account settings."],
    placeholder_rows: &[PlaceholderItem {
        description: "Pro plan",
        quantity: "5",
        rate: "29.00",
        amount: "145.00",
    }],
    ..STANDARD
};

pub const RETAIL: TemplateDescriptor = TemplateDescriptor {
    id: "retail",
    name: "Retail",
    industry: "Shops and e-commerce",
    style: StyleDefaults {
        corner_radius: CornerRadius::Small,
        logo_position: LogoPosition::Right,
        table_style: TableStyle::Striped,
        layout: Layout::Standard,
        primary: "#be123c",
        accent: "#fda4af",
        text: "#1f2937",
        background: "#ffffff",
        font_family: "Nunito",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        bill_to: "Sold To",
        description: "Product",
        rate: "Unit Price",
        ..Labels::STANDARD
    },
    fields: &[(Field::ItemDescription, "Product")],
    charges: ChargePolicy {
        always_show_shipping: true,
        ..ChargePolicy::STANDARD
    },
    skeleton: &[ShippingDetails, PaymentInformation, TermsAndConditions, TaxLine],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (ShippingDetails, &["Ships to the billing address unless noted otherwise."]),
        (TermsAndConditions, &["Returns are accepted within 30 days with this invoice."]),
    ],
    ..STANDARD
};

pub const REAL_ESTATE: TemplateDescriptor = TemplateDescriptor {
    id: "real-estate",
    name: "Real Estate",
    industry: "Property management",
    style: StyleDefaults {
        corner_radius: CornerRadius::Medium,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#14532d",
        accent: "#86efac",
        text: "#1c1917",
        background: "#ffffff",
        font_family: "Merriweather",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        bill_to: "Tenant / Client",
        description: "Charge",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Realty Group"),
        (Field::ItemDescription, "Monthly rent"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, TermsAndConditions, Signature],
    hidden: &[Signature],
    copy: &[(
        TermsAndConditions,
        &[
            "Rent is due on the first of each month.",
            "A late fee applies to payments received after {{due_date}}.",
        ],
    )],
    titles: &[(ProjectSummary, "Property Details")],
    ..STANDARD
};

pub const EDUCATION: TemplateDescriptor = TemplateDescriptor {
    id: "education",
    name: "Education",
    industry: "Schools and tutoring",
    style: StyleDefaults {
        corner_radius: CornerRadius::Medium,
        logo_position: LogoPosition::Center,
        table_style: TableStyle::Minimal,
        layout: Layout::Standard,
        primary: "#1d4ed8",
        accent: "#fde047",
        text: "#1e293b",
        background: "#ffffff",
        font_family: "Nunito",
        font_size: 10.5,
        font_weight: 400,
    },
    labels: Labels {
        bill_to: "Student Information",
        description: "Course / Fee",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Academy"),
        (Field::ClientName, "Student Name"),
        (Field::ItemDescription, "Tuition"),
    ],
    skeleton: &[PaymentInformation, Notes, TermsAndConditions],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[(
        TermsAndConditions,
        &["Tuition is non-refundable after the second week of classes."],
    )],
    ..STANDARD
};

pub const NONPROFIT: TemplateDescriptor = TemplateDescriptor {
    id: "nonprofit",
    name: "Nonprofit",
    industry: "Charities and foundations",
    style: StyleDefaults {
        corner_radius: CornerRadius::Medium,
        logo_position: LogoPosition::Center,
        table_style: TableStyle::Minimal,
        layout: Layout::Standard,
        primary: "#0f766e",
        accent: "#99f6e4",
        text: "#134e4a",
        background: "#ffffff",
        font_family: "Source Sans Pro",
        font_size: 10.0,
        font_weight: 400,
    },
    labels: Labels {
        bill_to: "Donor / Partner",
        description: "Program / Service",
        total: "Amount Due",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Nonprofit Organization"),
        (Field::ItemDescription, "Program support"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, Notes],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            ProjectSummary,
            &["Your contribution directly funds our community programs."],
        ),
        (
            Notes,
            &[
                "{{company_name}} is a registered nonprofit organization.",
                "Thank you for supporting our mission.",
            ],
        ),
    ],
    titles: &[(ProjectSummary, "Program Impact")],
    footer: &["Together we make a difference."],
    ..STANDARD
};

pub const LOGISTICS: TemplateDescriptor = TemplateDescriptor {
    id: "logistics",
    name: "Logistics & Freight",
    industry: "Freight carriers",
    style: StyleDefaults {
        corner_radius: CornerRadius::Small,
        logo_position: LogoPosition::Right,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#1e293b",
        accent: "#facc15",
        text: "#0f172a",
        background: "#ffffff",
        font_family: "Roboto Mono",
        font_size: 9.5,
        font_weight: 400,
    },
    labels: Labels {
        from: "Carrier",
        bill_to: "Consignee",
        description: "Freight / Service",
        quantity: "Units",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Freight Co."),
        (Field::ItemDescription, "Freight charge"),
    ],
    charges: ChargePolicy {
        always_show_shipping: true,
        ..ChargePolicy::STANDARD
    },
    skeleton: &[ShippingDetails, PaymentInformation, TermsAndConditions, Signature],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            ShippingDetails,
            &[
                "Freight billed per bill of lading.",
                "Claims must be filed within 9 months of delivery.",
            ],
        ),
        (Signature, &["Shipper Signature", "Consignee Signature"]),
    ],
    ..STANDARD
};

pub const AUTOMOTIVE: TemplateDescriptor = TemplateDescriptor {
    id: "automotive",
    name: "Automotive Repair",
    industry: "Repair shops and dealers",
    style: StyleDefaults {
        corner_radius: CornerRadius::Small,
        logo_position: LogoPosition::Left,
        table_style: TableStyle::Bordered,
        layout: Layout::Detailed,
        primary: "#991b1b",
        accent: "#fca5a5",
        text: "#1f2937",
        background: "#ffffff",
        font_family: "Roboto",
        font_size: 10.0,
        font_weight: 500,
    },
    labels: Labels {
        document_title: "REPAIR INVOICE",
        bill_to: "Vehicle Owner",
        description: "Part / Labor",
        ..Labels::STANDARD
    },
    fields: &[
        (Field::CompanyName, "Your Auto Shop"),
        (Field::ItemDescription, "Labor"),
        (Field::PaymentTerms, "Due on receipt"),
    ],
    skeleton: &[ProjectSummary, PaymentInformation, TermsAndConditions, Signature],
    hidden: NO_SECTIONS_HIDDEN,
    copy: &[
        (
            TermsAndConditions,
            &[
                "Parts carry a 12-month / 12,000-mile warranty.",
                "Vehicles not collected within 7 days of completion may incur storage fees.",
            ],
        ),
        (Signature, &["Customer Authorization"]),
    ],
    titles: &[(ProjectSummary, "Vehicle Details")],
    ..STANDARD
};
