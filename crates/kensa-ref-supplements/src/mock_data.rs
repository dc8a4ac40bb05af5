//! Sample supplement articles for the kensa reference runtime.
//!
//! All article text is written for demonstration. The reference URLs point at
//! real public sources but are never fetched.

use serde_json::{json, Value};

// ── Articles ──────────────────────────────────────────────────────────────────

/// A complete, compliant article. Scores 100 (grade A).
pub fn vitamin_c_article() -> Value {
    json!({
        "name": "ビタミンC",
        "name_en": "Vitamin C",
        "scientific_name": "L-ascorbic acid",
        "slug": "vitamin-c",
        "summary": "ビタミンCは水に溶けやすい水溶性ビタミンの一つで、果物や野菜に多く含まれます。体内で合成できないため、毎日の食事から取り入れることが大切な栄養素です。",
        "description": "ビタミンCはコラーゲンの生成や鉄の吸収に関わる栄養素として知られています。人は体内でビタミンCを作ることができないため、柑橘類、キウイフルーツ、ブロッコリー、ピーマンなどから摂取する必要があります。加熱や水洗いによって失われやすい性質があるため、生で食べられる果物や、短時間で調理した野菜から取り入れると無駄がありません。食事だけで不足しがちな方は、サプリメントを栄養補給の手段として活用する方法もあります。厚生労働省の食事摂取基準では、成人の推奨量が1日100mgと定められています。",
        "mechanism": "ビタミンCは強い還元作用を持ち、体内で発生する活性酸素を受け止める抗酸化物質としてはたらきます。また、コラーゲンを合成する酵素の補因子として必要とされ、皮膚や血管、骨の構造を保つことに関わっています。腸管では三価の鉄を二価の鉄に変えることで、植物性食品に含まれる鉄の吸収を助けます。",
        "recommended_intake": "成人は1日100mgを目安に、食事とあわせて数回に分けてお召し上がりください。",
        "benefits": [
            {
                "title": "肌のコンディション維持",
                "description": "コラーゲンの生成を支える栄養素として、季節の変わり目にも健やかな肌を保ちたい方の食生活をサポートします。"
            },
            {
                "title": "鉄の吸収をサポート",
                "description": "植物性食品に含まれる鉄の吸収を助けるため、鉄を意識した食事と組み合わせて取り入れたい栄養素です。"
            },
            {
                "title": "抗酸化のはたらき",
                "description": "活性酸素から体を守る抗酸化物質の一つとして、バランスのよい食生活を続けたい方の毎日を支えます。"
            }
        ],
        "side_effects": [
            "一度に大量に摂取すると、お腹がゆるくなることがあります。",
            "腎臓に持病のある方は、摂取前に医師にご相談ください。"
        ],
        "faq": [
            {
                "question": "いつ飲むのがよいですか？",
                "answer": "水溶性で体内にとどめておける量が限られるため、朝と夜など数回に分けて、食後に水と一緒に摂取するのがおすすめです。"
            },
            {
                "question": "食事からとるだけでは足りませんか？",
                "answer": "果物や野菜を十分に食べている方は食事だけでまかなえます。外食が多く野菜が不足しがちな方は、栄養補給としてサプリメントを活用してください。"
            },
            {
                "question": "ほかのサプリメントと一緒に飲めますか？",
                "answer": "一般的なビタミンやミネラルと組み合わせて問題ありません。薬を服用中の方は、念のため医師にご相談ください。"
            }
        ],
        "references": [
            "https://pubmed.ncbi.nlm.nih.gov/10584061/",
            "https://pubmed.ncbi.nlm.nih.gov/29099763/",
            "https://ods.od.nih.gov/factsheets/VitaminC-HealthProfessional/",
            "https://www.cochranelibrary.com/cdsr/doi/10.1002/14651858.CD000980.pub4/full",
            "https://www.mhlw.go.jp/stf/seisakunitsuite/bunya/kenkou_iryou/kenkou/eiyou/syokuji_kijyun.html",
            "https://www.ncbi.nlm.nih.gov/books/NBK225480/"
        ],
        "evidence_level": "A"
    })
}

/// A mostly sound article with one critical claim in its description and a
/// plain-http academic reference. Scores 87 (grade B) as written.
pub fn zinc_article() -> Value {
    json!({
        "name": "亜鉛",
        "name_en": "Zinc",
        "slug": "zinc",
        "summary": "亜鉛は体内の多くの酵素に含まれるミネラルで、味覚や皮膚の健康維持に欠かせません。体内にためておけないため、毎日の食事から補う必要があります。",
        "description": "亜鉛は牡蠣や牛肉、レバー、ナッツ類に多く含まれるミネラルです。体内では数百種類の酵素のはたらきに関わり、たんぱく質の合成や細胞の新陳代謝を支えています。加工食品中心の食生活や、過度な飲酒が続くと不足しやすいといわれています。味覚の変化を感じたら、食生活を見直すきっかけにしましょう。亜鉛不足による味覚の不調もすぐに治ります。",
        "mechanism": "亜鉛は多くの酵素の活性中心に存在し、たんぱく質やDNAの合成、細胞分裂に関わっています。味を感じる味蕾の細胞は入れ替わりが早いため、亜鉛が不足すると味覚に影響が出やすくなります。",
        "recommended_intake": "成人男性は1日11mg、成人女性は1日8mgが推奨量の目安です。",
        "benefits": [
            {
                "title": "味覚の維持",
                "description": "味蕾の細胞の入れ替わりを支え、食事をおいしく味わうための毎日の栄養補給に役立ちます。"
            },
            {
                "title": "肌と髪の健康",
                "description": "皮膚や髪の毛をつくるたんぱく質の合成に関わり、健やかな肌と髪を保ちたい方を応援します。"
            },
            {
                "title": "新陳代謝のサポート",
                "description": "細胞分裂に必要な酵素のはたらきを支え、体の新陳代謝を内側からサポートします。"
            }
        ],
        "side_effects": [
            "長期間にわたり過剰に摂取すると、銅の吸収が妨げられることがあります。"
        ],
        "faq": [
            {
                "question": "食事だけで足りますか？",
                "answer": "牡蠣や赤身の肉を定期的に食べている方は、食事だけで推奨量に届くことが多いです。偏った食生活の方は補助的に取り入れてください。"
            },
            {
                "question": "どのタイミングで飲めばよいですか？",
                "answer": "空腹時に飲むと胃の不快感が出ることがあるため、食後に水と一緒に摂取するのがおすすめです。"
            },
            {
                "question": "ほかのミネラルと一緒に飲めますか？",
                "answer": "鉄やカルシウムと同時に大量に摂取すると吸収が競合することがあるため、時間をずらして摂取すると安心です。"
            }
        ],
        "references": [
            "https://pubmed.ncbi.nlm.nih.gov/23914218/",
            "https://pubmed.ncbi.nlm.nih.gov/28515951/",
            "https://ods.od.nih.gov/factsheets/Zinc-HealthProfessional/",
            "https://www.mhlw.go.jp/content/10904750/000586568.pdf",
            "http://www.jstage.jst.go.jp/article/vso/example/_article/-char/ja/"
        ],
        "evidence_level": "B"
    })
}

/// A promotional draft that breaks nearly every rule: eleven regulated
/// expressions (one mitigated), an untranslated English sentence, a missing
/// `side_effects` section, short sections, weak references, and an evidence
/// label outside the taxonomy.
pub fn collagen_article() -> Value {
    json!({
        "name": "コラーゲン",
        "name_en": "Collagen",
        "slug": "collagen",
        "summary": "飲むだけで肌が若返る、日本一のコラーゲンサプリ。",
        "description": "年齢とともに減少するコラーゲンを毎日しっかり補給。医薬品のような効果が期待できますが、個人差があります。関節の痛みを改善し、シワを完治させる最高品質の原料を使用しています。This supplement is made from premium marine collagen peptides. 副作用なしで安心です。",
        "mechanism": "コラーゲンペプチドは体内で吸収され、肌の細胞を刺激して新しいコラーゲンの生成を促すといわれています。免疫力を高める作用もあり、風邪の予防にも役立ちます。",
        "recommended_intake": "1日5000mgを目安に。",
        "benefits": [
            {
                "title": "美肌",
                "description": "肌にハリとツヤを与え、シワやたるみに効きます。"
            },
            {
                "title": "関節サポート",
                "description": "歩くときの膝の痛みが治ると評判です。個人の感想です。"
            }
        ],
        "faq": [
            {
                "question": "どのくらいで実感できますか？",
                "answer": "個人差がありますが、多くの方が1か月ほどで変化を感じています。"
            }
        ],
        "references": [
            "http://collagen-lab.example.com/study",
            "https://pubmed.ncbi.nlm.nih.gov/24401291/",
            "not-a-url"
        ],
        "evidence_level": "S"
    })
}

// ── Malformed inputs ──────────────────────────────────────────────────────────

/// Truncated JSON text, as a half-written export would produce.
pub const TRUNCATED_ARTICLE_JSON: &str = r#"{ "name": "ビオチン", "summary": "ビオチンは水溶性の"#;

/// A document whose root is a list instead of an article object.
pub fn list_root_document() -> Value {
    json!(["ビタミンD", "ビタミンE"])
}
