//! The built-in 30 day digital marketing syllabus.

/// `(day, title, description, topics)` for every shipped lesson.
pub(crate) const LESSONS: &[(u8, &str, &str, &[&str])] = &[
    (
        1,
        "SEO এর মূল ভিত্তি (SEO Fundamentals)",
        "Search Engine Optimization এর বেসিক ধারণা এবং কীভাবে Google এ র‍্যাঙ্ক করতে হয়",
        &["SEO বেসিক", "Keywords", "Search Console"],
    ),
    (
        2,
        "On-Page SEO কৌশল",
        "Title, Meta Description, Header Tags এবং Content Optimization",
        &["Title Tags", "Meta Description", "Header Tags", "Internal Linking"],
    ),
    (
        3,
        "Off-Page SEO ও Link Building",
        "Backlinks, Domain Authority এবং Link Building Strategy",
        &["Backlinks", "Guest Posting", "Directory Submission", "Social Signals"],
    ),
    (
        4,
        "Technical SEO ও Core Web Vitals",
        "Website Speed, Mobile Optimization এবং Technical Issues",
        &["Page Speed", "Mobile-First", "Core Web Vitals", "Schema Markup"],
    ),
    (
        5,
        "Google Ads এর পরিচিতি",
        "Search Engine Marketing এর ভিত্তি এবং Google Ads Account Setup",
        &["SEM বেসিক", "Account Setup", "Campaign Types", "Bidding"],
    ),
    (
        6,
        "PPC Campaign ব্যবস্থাপনা",
        "Pay-Per-Click Campaign তৈরি এবং Optimization",
        &["Campaign Structure", "Ad Groups", "Keywords", "Ad Copy"],
    ),
    (
        7,
        "Advanced Google Ads কৌশল",
        "Conversion Tracking, Remarketing এবং Advanced Features",
        &["Conversion Tracking", "Remarketing", "Extensions", "Automation"],
    ),
    (
        8,
        "SEM Advanced Strategies",
        "Shopping Ads, Display Network এবং YouTube Ads",
        &["Shopping Ads", "Display Network", "YouTube Ads", "Performance Max"],
    ),
    (
        9,
        "Facebook Marketing এর ভিত্তি",
        "Facebook Business Page, Content Strategy এবং Organic Reach",
        &["Business Page", "Content Planning", "Engagement", "Analytics"],
    ),
    (
        10,
        "Facebook Ads Campaign",
        "Facebook Ads Manager, Campaign Objectives এবং Targeting",
        &["Ads Manager", "Campaign Types", "Audience Targeting", "Budget"],
    ),
    (
        11,
        "Instagram Marketing",
        "Visual Content Marketing এর শক্তিশালী প্ল্যাটফর্ম",
        &["Business Account", "Stories", "Reels", "Shopping", "Hashtags"],
    ),
    (
        12,
        "LinkedIn ও Professional Marketing",
        "B2B Marketing এবং Professional Network Building",
        &["Company Page", "LinkedIn Ads", "Content Strategy", "Lead Generation"],
    ),
    (
        13,
        "TikTok Marketing কৌশল",
        "Short-form Video Content এবং Viral Marketing",
        &["TikTok Business", "Video Content", "Trends", "TikTok Ads"],
    ),
    (
        14,
        "YouTube Marketing ও SEO",
        "Video Marketing এবং YouTube Channel Optimization",
        &["Channel Setup", "Video SEO", "YouTube Ads", "Analytics"],
    ),
    (
        15,
        "Content Marketing Strategy",
        "Content Planning, Creation এবং Distribution",
        &["Content Calendar", "Blog Writing", "Visual Content", "Content SEO"],
    ),
    (
        16,
        "AI Content Creation",
        "ChatGPT, Jasper এবং AI Tools দিয়ে Content তৈরি",
        &["ChatGPT", "AI Writing Tools", "Content Automation", "Quality Control"],
    ),
    (
        17,
        "Video Content ও Reels",
        "Video Marketing এবং Short-form Content Strategy",
        &["Video Planning", "Editing Tools", "Reels Strategy", "Live Streaming"],
    ),
    (
        18,
        "Blogging ও Website Content",
        "Blog Writing, SEO Content এবং Website Copy",
        &["Blog Strategy", "SEO Writing", "Website Copy", "Content Updates"],
    ),
    (
        19,
        "Email Marketing Fundamentals",
        "Email List Building এবং Campaign Strategy",
        &["List Building", "Email Design", "Segmentation", "Automation"],
    ),
    (
        20,
        "Email Automation",
        "Drip Campaigns, Welcome Series এবং Behavioral Triggers",
        &["Drip Campaigns", "Welcome Series", "Behavioral Emails", "A/B Testing"],
    ),
    (
        21,
        "Advanced Email Marketing",
        "Personalization, Analytics এবং Deliverability",
        &["Personalization", "Email Analytics", "Deliverability", "GDPR"],
    ),
    (
        22,
        "Google Analytics 4",
        "GA4 Setup, Reports এবং Data Analysis",
        &["GA4 Setup", "Reports", "Conversions", "Audiences"],
    ),
    (
        23,
        "Social Media Analytics",
        "Facebook Insights, Instagram Analytics এবং Social ROI",
        &["Facebook Insights", "Instagram Analytics", "Social ROI", "Reporting"],
    ),
    (
        24,
        "Marketing Analytics ও ROI",
        "Campaign Performance, Attribution এবং Data-driven Decisions",
        &["Performance Metrics", "Attribution", "ROI Calculation", "Dashboards"],
    ),
    (
        25,
        "Facebook Ads Advanced",
        "Advanced Targeting, Custom Audiences এবং Lookalike",
        &["Custom Audiences", "Lookalike Audiences", "Retargeting", "Optimization"],
    ),
    (
        26,
        "Google Ads Mastery",
        "Advanced Google Ads Features এবং Optimization",
        &["Smart Campaigns", "Responsive Ads", "Bid Strategies", "Quality Score"],
    ),
    (
        27,
        "Multi-Platform Advertising",
        "TikTok Ads, LinkedIn Ads এবং Cross-platform Strategy",
        &["TikTok Ads", "LinkedIn Ads", "Cross-platform", "Budget Allocation"],
    ),
    (
        28,
        "AI Tools ও Automation",
        "ChatGPT, MidJourney, Canva AI এবং Marketing Automation",
        &["ChatGPT Marketing", "AI Design Tools", "Automation Tools", "Workflow"],
    ),
    (
        29,
        "Marketing Automation",
        "CRM Integration, Lead Nurturing এবং Sales Funnel",
        &["CRM Integration", "Lead Nurturing", "Sales Funnel", "Customer Journey"],
    ),
    (
        30,
        "Digital Marketing Strategy",
        "Complete Marketing Plan, Budget Allocation এবং Future Planning",
        &["Marketing Plan", "Budget Planning", "Team Building", "Scaling"],
    ),
];
