//! Template tables, grouped per jurisdiction and category in listing order.
//!
//! File names are stored exactly as they exist on disk, stray double spaces
//! and misspellings included.

use super::CategoryTemplates;

pub(super) static DELHI: &[CategoryTemplates] = &[
    CategoryTemplates {
        category: "RTI Delhi Police & Security",
        entries: &[
            ("RTI Delhi Police", "RTI Template For Delhi Police.pdf"),
            ("RTI Delhi Fire Services Department", "RTI Template For Delhi Fire Services Department.pdf"),
            ("RTI Delhi Prisons Department", "RTI Template For Delhi Prisoners Department.pdf"),
            ("RTI Delhi Home Department", "RTI Template For Delhi Home Department.pdf"),
            ("RTI Delhi Judicial Department", "RTI Template For Delhi Judicial Department.pdf"),
            ("RTI Delhi Law, Justice & Legislative Affairs Department", "RTI Template For Delhi Law, Justice & Legislative Affairs Department.pdf"),
            ("RTI Delhi Disaster Management Department", "RTI Template For  Delhi Disaster Management Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Municipal & Housing",
        entries: &[
            ("RTI Delhi Municipal Corporation (MCD)", "RTI Template For  Delhi Municipal Corporation (MCD).pdf"),
            ("RTI Delhi Urban Development Department", "RTI Template For Delhi Urban Development Department.pdf"),
            ("RTI Delhi Housing & Urban Development Department", "RTI Template For  Delhi Housing & Urban Development Department.pdf"),
            ("RTI Delhi Public Works Department (PWD)", "RTI Template For Delhi Public Works Department (PWD).pdf"),
            ("RTI Delhi Rural Development Department", "RTI Template For Delhi Rural Development Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Utilities & Infrastructure",
        entries: &[
            ("RTI Delhi Jal Board (DJB)", "RTI Templare For Delhi Jal Board (DJB).pdf"),
            ("RTI Delhi Transco Limited (DTL)", "RTI Template For Delhi Transco Limited (DTL).pdf"),
            ("RTI Delhi Power Department", "RTI Delhi Power Department.pdf"),
            ("RTI Delhi Water Supply Department", "RTI Template For Delhi Water Supply Department.pdf"),
            ("RTI Delhi Ground Water Department", "RTI Template for Delhi Ground Water Department.pdf"),
            ("RTI Delhi Irrigation & Flood Control Department", "RTI Template for Delhi Irrigation & Flood Control Department.pdf"),
            ("RTI Delhi Renewable Energy Department", "RTI Template for Delhi Renewable Energy Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Government Services",
        entries: &[
            ("RTI Delhi Revenue Department", "RTI Template for Delhi Revenue Department.pdf"),
            ("RTI Delhi Education Department", "RTI Template for Delhi Education Department.pdf"),
            ("RTI Delhi Health & Family Welfare Department", "RTI Template for Delhi Health & Family Welfare.pdf"),
            ("RTI Delhi Transport Department", "RTI Template for Delhi Transport Department.pdf"),
            ("RTI Delhi Finance Department", "RTI Template for Delhi Finance Department.pdf"),
            ("RTI Delhi Registration & Stamps Department", "RTI Template for Delhi Registration & Stamps Department.pdf"),
            ("RTI Delhi Planning Department", "RTI Template for Delhi Planning Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Social Welfare",
        entries: &[
            ("RTI Delhi Social Welfare Department", "RTI Template for Delhi Social Welfare Department.pdf"),
            ("RTI Delhi Scheduled Castes & Scheduled Tribes Welfare Department", "RTI Template for Delhi Scheduled Castes & Scheduled Tribes Welfare Department.pdf"),
            ("RTI Delhi Women & Child Development Department", "RTI Template for Delhi Women & Child Development Department.pdf"),
            ("RTI Delhi Backward Classes Welfare Department", "RTI Template for Delhi Backward Classes Welfare Department.pdf"),
            ("RTI Delhi Minority Affairs Department", "RTI Template for Delhi Minority Affairs Department.pdf"),
            ("RTI Delhi Youth & Sports Department", "RTI Template for Delhi Youth & Sports Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Commerce & Industry",
        entries: &[
            ("RTI Delhi Labour Department", "RTI Template for Delhi Labour Department.pdf"),
            ("RTI Delhi Industries Department", "RTI Template for Delhi Industries Department.pdf"),
            ("RTI Delhi Value Added Tax Department", "RTI Template for Delhi Value Added Tax Department.pdf"),
            ("RTI Delhi Food, Civil Supplies & Consumer Affairs Department", "RTI Template for Delhi Food, Civil Supplies & Consumer Affairs Department.pdf"),
            ("RTI Delhi Consumer Affairs Department", "RTI Template for Delhi Consumer Affairs Department.pdf"),
            ("RTI Delhi Cooperation Department", "RTI Template for Delhi Cooperation Department.pdf"),
            ("RTI Delhi Agricultural Marketing Department", "RTI Template for Delhi Agricultural Marketing Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Environment & Resources",
        entries: &[
            ("RTI Delhi Environment Department", "RTI Template for Delhi Environment Department.pdf"),
            ("RTI Delhi Forest & Wildlife Department", "RTI Template for Delhi Forest & Wildlife Department.pdf"),
            ("RTI Delhi Mines & Geology Department", "RTI Template for Delhi Mines & Geology Department.pdf"),
            ("RTI Delhi Science & Technology Department", "RTI Template for Delhi Science & Technology Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Culture & Tourism",
        entries: &[
            ("RTI Delhi Tourism Department", "RTI Template for Delhi Tourism Department.pdf"),
            ("RTI Delhi Art, Culture & Languages Department", "RTI Template for Delhi Art, Culture & Languages Department.pdf"),
            ("RTI Delhi Archaeology Department", "RTI Template for Delhi Archaeology Department.pdf"),
            ("RTI Delhi Handloom & Handicrafts Department", "RTI Template for Delhi Handloom & Handicrafts Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Information & Technology",
        entries: &[
            ("RTI Delhi Information & Publicity Department", "RTI Template for Delhi Information & Publicity Department.pdf"),
            ("RTI Delhi Information Technology Department", "RTI Template for Delhi Information Technology Department.pdf"),
            ("RTI Delhi Telecommunications Department", "RTI Template for Delhi Telecommunications Department.pdf"),
            ("RTI Delhi Postal Services Department", "RTI Template for Delhi Postal Services Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Delhi Financial Services",
        entries: &[
            ("RTI Delhi Banking & Financial Services Department", "RTI Template for Delhi Banking & Financial Services Department.pdf"),
            ("RTI Delhi Insurance Department", "RTI Template for Delhi Insurance Department.pdf"),
            ("RTI Delhi Pension Department", "RTI Template for Delhi Pension Department.pdf"),
        ],
    },
];

pub(super) static KARNATAKA: &[CategoryTemplates] = &[
    CategoryTemplates {
        category: "RTI Karnataka Police & Security",
        entries: &[
            ("RTI Karnataka Home Department", "RTI Template for Karnataka Home Department.pdf"),
            ("RTI Karnataka Police Department", "RTI Template for Karnataka Police Department.pdf"),
            ("RTI Karnataka Fire Services Department", "RTI Template for Karnataka Fire Services Department.pdf"),
            ("RTI Karnataka Prisons Department", "RTI Template for Karnataka Prisons Department.pdf"),
            ("RTI Karnataka Law Department", "RTI Template for Karnataka Law Department.pdf"),
            ("RTI Karnataka Disaster Management Department", "RTI Template for Karnataka Disaster Management Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Finance & Revenue",
        entries: &[
            ("RTI Karnataka Finance Department", "RTI Template for Karnataka Finance Department.pdf"),
            ("RTI Karnataka Revenue Department", "RTI Template for Karnataka Revenue Department.pdf"),
            ("RTI Karnataka Commercial Taxes Department", "RTI Template for Karnataka Commercial Taxes Department.pdf"),
            ("RTI Karnataka Registration & Stamps Department", "RTI Template for Karnataka Registration & Stamps Department.pdf"),
            ("RTI Karnataka Planning Department", "RTI Template for Karnataka Planning Department.pdf"),
            ("RTI Karnataka Treasuries Department", "RTI Template for Karnataka Treasuries Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Transport & Infrastructure",
        entries: &[
            ("RTI Karnataka Transport Department", "RTI Template for Karnataka Transport Department.pdf"),
            ("RTI Karnataka Public Works Department (PWD)", "RTI Template for Karnataka Public Works Department (PWD).pdf"),
            ("RTI Karnataka Urban Development Department", "RTI Template for Karnataka Urban Development Department.pdf"),
            ("RTI Karnataka Rural Development & Panchayat Raj Department", "RTI Template for Karnataka Rural Development & Panchayat Raj Department.pdf"),
            ("RTI Karnataka Municipal Administration Department", "RTI Template for Karnataka Municipal Administration Department.pdf"),
            ("RTI Karnataka Infrastructure Development Department", "RTI Template for Karnataka Infrastructure Development Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Education & Health",
        entries: &[
            ("RTI Karnataka Department of Primary & Secondary Education", "RTI Template for Karnataka Department of Primary & Secondary Education.pdf"),
            ("RTI Karnataka Higher Education Department", "RTI Template for Karnataka Higher Education Department.pdf"),
            ("RTI Karnataka Technical Education Department", "RTI Template for Karnataka Technical Education Department.pdf"),
            ("RTI Karnataka Health & Family Welfare Department", "RTI Template for Karnataka Health & Family Welfare Department.pdf"),
            ("RTI Karnataka Medical Education Department", "RTI Template for Karnataka Medical Education Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Agriculture & Rural Development",
        entries: &[
            ("RTI Karnataka Agriculture Department", "RTI Template for Karnataka Agriculture Department.pdf"),
            ("RTI Karnataka Horticulture Department", "RTI Template for Karnataka Horticulture Department.pdf"),
            ("RTI Karnataka Animal Husbandry & Veterinary Services Department", "RTI Template for Karnataka Animal Husbandry & Veterinary Services Department.pdf"),
            ("RTI Karnataka Co-operation Department", "RTI Template for Karnataka Co-operation Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Social Welfare",
        entries: &[
            ("RTI Karnataka Social Welfare Department", "RTI Template for Karnataka Social Welfare Department.pdf"),
            ("RTI Karnataka Scheduled Castes Development Department", "RTI Template for Karnataka Scheduled Castes Development Department.pdf"),
            ("RTI Karnataka Scheduled Tribes Welfare Department", "RTI Template for Karnataka Scheduled Tribes Welfare Department.pdf"),
            ("RTI Karnataka Women & Child Development Department", "RTI Template for Karnataka Women & Child Development Department.pdf"),
            ("RTI Karnataka Backward Classes Welfare Department", "RTI Template for Karnataka Backward Classes Welfare Department.pdf"),
            ("RTI Karnataka Minority Welfare Department", "RTI Template for Karnataka Minority Welfare Department.pdf"),
            ("RTI Karnataka Youth & Sports Department", "RTI Template for Karnataka Youth & Sports Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Commerce & Industry",
        entries: &[
            ("RTI Karnataka Industries & Commerce Department", "RTI Template for Karnataka Industries & Commerce Department.pdf"),
            ("RTI Karnataka Labour Department", "RTI Template for Karnataka Labour Department.pdf"),
            ("RTI Karnataka Food & Civil Supplies Department", "RTI Template for Karnataka Food & Civil Supplies Department.pdf"),
            ("RTI Karnataka Handlooms & Textiles Department", "RTI Template for Karnataka Handlooms & Textiles Department.pdf"),
            ("RTI Karnataka Mines & Geology Department", "RTI Template for Karnataka Mines & Geology Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Environment & Resources",
        entries: &[
            ("RTI Karnataka Environment Department", "RTI Template for Karnataka Environment Department.pdf"),
            ("RTI Karnataka Forest Department", "RTI Template for Karnataka Forest Department.pdf"),
            ("RTI Karnataka Water Resources Department", "RTI Template for Karnataka Water Resources Department.pdf"),
            ("RTI Karnataka Energy Department", "RTI Template for Karnataka Energy Department.pdf"),
            ("RTI Karnataka Irrigation & CAD Department", "RTI Template for Karnataka Irrigation & CAD Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Information & Technology",
        entries: &[
            ("RTI Karnataka Information Technology Department", "RTI Template for Karnataka Information Technology Department.pdf"),
            ("RTI Karnataka Information & Public Relations Department", "RTI Template for Karnataka Information & Public Relations Department.pdf"),
            ("RTI Karnataka e-Governance Department", "RTI Template for Karnataka e-Governance Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Karnataka Culture & Tourism",
        entries: &[
            ("RTI Karnataka Tourism Department", "RTI Template for Karnataka Tourism Department.pdf"),
            ("RTI Karnataka Kannada & Culture Department", "RTI Template for Karnataka Kannada & Culture Department.pdf"),
            ("RTI Karnataka Archaeology Department", "RTI Template for Karnataka Archaeology Department.pdf"),
            ("RTI Karnataka Religious & Charitable Endowments Department", "RTI Template for Karnataka Religious & Charitable Endowments Department.pdf"),
        ],
    },
];

pub(super) static GOA: &[CategoryTemplates] = &[
    CategoryTemplates {
        category: "RTI Goa Police & Security",
        entries: &[
            ("RTI Goa Home Department", "RTI Template for Goa Home Department.pdf"),
            ("RTI Goa Police Department", "RTI Template for Goa Police Department.pdf"),
            ("RTI Goa Fire Services Department", "RTI Template for Goa Fire Services Department.pdf"),
            ("RTI Goa Prisons Department", "RTI Template for Goa Prisons Department.pdf"),
            ("RTI Goa Law Department", "RTI Template for Goa Law Department.pdf"),
            ("RTI Goa Disaster Management Department", "RTI Template for Goa Disaster Management Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Finance & Revenue",
        entries: &[
            ("RTI Goa Finance Department", "RTI Template for Goa Finance Department.pdf"),
            ("RTI Goa Revenue Department", "RTI Template for Goa Revenue Department.pdf"),
            ("RTI Goa Commercial Taxes Department", "RTI Template for Goa Commercial Taxes Department.pdf"),
            ("RTI Goa Registration & Stamps Department", "RTI Template for Goa Registration & Stamps Department.pdf"),
            ("RTI Goa Planning Department", "RTI Template for Goa Planning Department.pdf"),
            ("RTI Goa Treasuries Department", "RTI Template for Goa Treasuries Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Transport & Infrastructure",
        entries: &[
            ("RTI Goa Transport Department", "RTI Template for Goa Transport Department.pdf"),
            ("RTI Goa Public Works Department (PWD)", "RTI Template for Goa Public Works Department PWD.pdf"),
            ("RTI Goa Urban Development Department", "RTI Template for Goa Urban Development Department.pdf"),
            ("RTI Goa Municipal Administration Department", "RTI Template for Goa Municipal Administration Department.pdf"),
            ("RTI Goa Rural Development & Panchayats Department", "RTI Template for Goa Rural Development & Panchayats Department.pdf"),
            ("RTI Goa Infrastructure Development Department", "RTI Template for Goa Infrastructure Development Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Education & Health",
        entries: &[
            ("RTI Goa Directorate of Education", "RTI Template for Goa Directorate of Education.pdf"),
            ("RTI Goa Directorate of Health Services", "RTI Template for Goa Directorate of Health Services.pdf"),
            ("RTI Goa Directorate of Technical Education", "RTI Template for Goa Directorate of Technical Education.pdf"),
            ("RTI Goa Medical Education Department", "RTI Template for Goa Medical Education Department.pdf"),
            ("RTI Goa Higher Education Department", "RTI Template for Goa Higher Education Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Agriculture & Rural Development",
        entries: &[
            ("RTI Goa Directorate of Agriculture", "RTI Template for Goa Directorate of Agriculture.pdf"),
            ("RTI Goa Animal Husbandry & Veterinary Services Department", "RTI Template for Goa Animal Husbandry & Veterinary Services Department.pdf"),
            ("RTI Goa Co-operation Department", "RTI Template for Goa Co-operation Department.pdf"),
            ("RTI Goa Rural Development Department", "RTI Template for Goa Rural Development Department.pdf"),
            ("RTI Goa Directorate of Panchayats", "RTI Template for Goa Directorate of Panchayats.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Social Welfare",
        entries: &[
            ("RTI Goa Social Welfare Department", "RTI Template for Goa Social Welfare Department.pdf"),
            ("RTI Goa Tribal Welfare Department", "RTI Template for Goa Tribal Welfare Department.pdf"),
            ("RTI Goa Women & Child Development Department", "RTI Template for Goa Women & Child Development Department.pdf"),
            ("RTI Goa Backward Classes Welfare Department", "RTI Template for Goa Backward Classes Welfare Department.pdf"),
            ("RTI Goa Minorities Welfare Department", "RTI Template for Goa Minorities Welfare Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Commerce & Industry",
        entries: &[
            ("RTI Goa Industries, Trade & Commerce Department", "RTI Template for Goa Industries Trade & Commerce Department.pdf"),
            ("RTI Goa Labour & Employment Department", "RTI Template for Goa Labour & Employment Department.pdf"),
            ("RTI Goa Food & Civil Supplies Department", "RTI Template for Goa Food & Civil Supplies Department.pdf"),
            ("RTI Goa Mines & Geology Department", "RTI Template for Goa Mines & Geology Department.pdf"),
            ("RTI Goa Tourism Department", "RTI Template for Goa Tourism Department.pdf"),
            ("RTI Goa Excise Department", "RTI Template for Goa Excise Department.pdf"),
            ("RTI Goa Factories & Boilers Department", "RTI Template for Goa Factories & Boilers Department.pdf"),
            ("RTI Goa Handicrafts, Textile & Coir Department", "RTI Template for Goa Handicrafts Textile & Coir Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Environment & Resources",
        entries: &[
            ("RTI Goa Environment Department", "RTI Template for Goa Environment Department.pdf"),
            ("RTI Goa Forest Department", "RTI Template for Goa Forest Department.pdf"),
            ("RTI Goa Water Resources Department", "RTI Template for Goa Water Resources Department.pdf"),
            ("RTI Goa Electricity Department", "RTI Template for Goa Electricity Department.pdf"),
            ("RTI Goa Irrigation Department", "RTI Template for Goa Irrigation Department.pdf"),
            ("RTI Goa Drinking Water Department", "RTI Template for Goa Drinking Water Department.pdf"),
            ("RTI Goa New & Renewable Energy Department", "RTI Template for Goa New & Renewable Energy Department.pdf"),
            ("RTI Goa Science, Technology & Waste Management Department", "RTI Template for Goa Science Technology & Waste Management Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Information & Technology",
        entries: &[
            ("RTI Goa Information Technology Department", "RTI Template for Goa Information Technology Department.pdf"),
            ("RTI Goa Information & Public Relations Department", "RTI Template for Goa Information & Public Relations Department.pdf"),
            ("RTI Goa e-Governance Department", "RTI Template for Goa e-Governance Department.pdf"),
            ("RTI Goa Directorate of Accounts", "RTI Template for Goa Directorate of Accounts.pdf"),
            ("RTI Goa Printing & Stationery Department", "RTI Template for Goa Printing & Stationery Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Culture & Heritage",
        entries: &[
            ("RTI Goa Art & Culture Department", "RTI Template for Goa Art & Culture Department.pdf"),
            ("RTI Goa Archives & Archaeology Department", "RTI Template for Goa Archives & Archaeology Department.pdf"),
            ("RTI Goa Official Language Department", "RTI Template for Goa Official Language Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Municipal & Local Bodies",
        entries: &[
            ("RTI Goa Municipal Councils", "RTI Template for Goa Municipal Councils.pdf"),
            ("RTI Goa Village Panchayats", "RTI Template for Goa Village Panchayats.pdf"),
            ("RTI Goa Corporation of the City of Panaji (CCP)", "RTI Template for Goa Corporation of the City of Panaji CCP.pdf"),
            ("RTI Goa Margao Municipal Council", "RTI Template for Goa Margao Municipal Council.pdf"),
            ("RTI Goa Vasco da Gama Municipal Council", "RTI Template for Goa Vasco da Gama Municipal Council.pdf"),
            ("RTI Goa Town & Country Planning Department", "RTI Template for Goa Town & Country Planning Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Specialized Services",
        entries: &[
            ("RTI Goa Captain of Ports Department", "RTI Template for Goa Captain of Ports Department.pdf"),
            ("RTI Goa Civil Aviation/Airport Directorate", "RTI Template for Goa Civil Aviation Airport Directorate.pdf"),
            ("RTI Goa River & Navigation Department", "RTI Template for Goa River & Navigation Department.pdf"),
            ("RTI Goa Directorate of Skill Development & Entrepreneurship", "RTI Template for Goa Directorate of Skill Development & Entrepreneurship.pdf"),
            ("RTI Goa Legal Metrology Department", "RTI Template for Goa Legal Metrology Department.pdf"),
            ("RTI Goa Provedoria Department", "RTI Template for Goa Provedoria Department.pdf"),
            ("RTI Goa Public Grievances Department", "RTI Template for Goa Public Grievances Department.pdf"),
            ("RTI Goa Vigilance Department", "RTI Template for Goa Vigilance Department.pdf"),
            ("RTI Goa Protocol & Hospitality Department", "RTI Template for Goa Protocol & Hospitality Department.pdf"),
            ("RTI Goa Sainik Welfare Department", "RTI Template for Goa Sainik Welfare Department.pdf"),
        ],
    },
    CategoryTemplates {
        category: "RTI Goa Commissions & Authorities",
        entries: &[
            ("RTI Goa State Information Commission", "RTI Template for Goa State Information Commission.pdf"),
            ("RTI Goa State Commission for Backward Classes", "RTI Template for Goa State Commission for Backward Classes.pdf"),
            ("RTI Goa Public Service Commission", "RTI Template for Goa Public Service Commission.pdf"),
            ("RTI Goa Legislative Assembly", "RTI Template for Goa Legislative Assembly.pdf"),
            ("RTI Goa Chief Electoral Officer Office", "RTI Template for Goa Chief Electoral Officer Office.pdf"),
        ],
    },
];
