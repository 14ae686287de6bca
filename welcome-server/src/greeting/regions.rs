//! Region → greeting lookup tables.
//!
//! Lookup is exact, case-sensitive string matching on the names the
//! geolocation service reports. The first matching row wins; anything not
//! listed falls through to a generic greeting.

/// Country value that unlocks province/city resolution.
pub const CHINA: &str = "中国";

/// Greeting for a country not in [`COUNTRIES`].
pub const UNKNOWN_COUNTRY_GREETING: &str = "带我去你的国家看看吧";

/// Greeting for a Chinese province not in [`PROVINCES`].
pub const UNKNOWN_PROVINCE_GREETING: &str = "带我去你的城市逛逛吧";

/// Placeholder for an unreported address or country.
pub const UNKNOWN: &str = "未知";

/// Countries outside China, each with one greeting.
pub static COUNTRIES: &[(&str, &str)] = &[
    ("日本", "よろしく，一起去看樱花吗"),
    ("美国", "Make America Great Again"),
    ("英国", "想同你一起夜乘伦敦眼"),
    ("俄罗斯", "干了这瓶伏特加"),
    ("法国", "C'est La Vie"),
    ("德国", "Die Zeit verging im Fluge"),
    ("澳大利亚", "一起去大堡礁吧"),
    ("加拿大", "拾起一片枫叶赠予你"),
];

/// How a province picks its greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvinceGreeting {
    /// One greeting for the whole province.
    Fixed(&'static str),
    /// Per-city greetings, with a fallback for unlisted cities.
    ByCity {
        cities: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    },
}

/// One row of the province table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceEntry {
    pub name: &'static str,
    pub greeting: ProvinceGreeting,
    /// Municipalities and SARs display just their own name as the address.
    pub address_override: bool,
}

impl ProvinceEntry {
    /// The greeting for a visitor from `city` in this province.
    pub fn greeting_for(&self, city: &str) -> &'static str {
        match self.greeting {
            ProvinceGreeting::Fixed(greeting) => greeting,
            ProvinceGreeting::ByCity { cities, fallback } => {
                lookup(cities, city).unwrap_or(fallback)
            }
        }
    }
}

const fn province(name: &'static str, greeting: &'static str) -> ProvinceEntry {
    ProvinceEntry {
        name,
        greeting: ProvinceGreeting::Fixed(greeting),
        address_override: false,
    }
}

const fn municipality(name: &'static str, greeting: &'static str) -> ProvinceEntry {
    ProvinceEntry {
        name,
        greeting: ProvinceGreeting::Fixed(greeting),
        address_override: true,
    }
}

const JIANGSU_CITIES: &[(&str, &str)] = &[
    ("南京市", "欢迎来自安徽省南京市的小伙伴"),
    ("苏州市", "上有天堂，下有苏杭"),
    ("泰州市", "这里也是我的故乡"),
];

/// Province-level divisions with a custom greeting.
pub static PROVINCES: &[ProvinceEntry] = &[
    municipality("北京市", "北——京——欢迎你"),
    municipality("天津市", "讲段相声吧"),
    municipality("重庆市", "高德地图:已到达重庆，下面交给百度地图导航"),
    province("河北省", "山势巍巍成壁垒，天下雄关。铁马金戈由此向，无限江山"),
    province("山西省", "展开坐具长三尺，已占山河五百余"),
    province("内蒙古自治区", "天苍苍，野茫茫，风吹草低见牛羊"),
    province("辽宁省", "我想吃烤鸡架"),
    province("吉林省", "状元阁就是东北烧烤之王"),
    province("黑龙江省", "很喜欢哈尔滨大剧院"),
    municipality("上海市", "众所周知，中国只有两个城市"),
    ProvinceEntry {
        name: "江苏省",
        greeting: ProvinceGreeting::ByCity {
            cities: JIANGSU_CITIES,
            fallback: "散装是必须要散装的",
        },
        address_override: false,
    },
    province("浙江省", "东风渐绿西湖柳，雁已还人未南归"),
    province("安徽省", "蚌埠住了，芜湖起飞"),
    province("福建省", "井邑白云间，岩城远带山"),
    province("江西省", "落霞与孤鹜齐飞，秋水共长天一色"),
    province("山东省", "遥望齐州九点烟，一泓海水杯中泻"),
    province("湖北省", "来碗热干面"),
    province("湖南省", "74751，长沙斯塔克"),
    province("广东省", "老板来两斤福建人"),
    province("广西壮族自治区", "桂林山水甲天下"),
    province("海南省", "朝观日出逐白浪，夕看云起收霞光"),
    province("四川省", "康康川妹子"),
    province("贵州省", "茅台，学生，再塞200"),
    province("云南省", "玉龙飞舞云缠绕，万仞冰川直耸天"),
    province("西藏自治区", "躺在茫茫草原上，仰望蓝天"),
    province("陕西省", "来份臊子面加馍"),
    province("甘肃省", "羌笛何须怨杨柳，春风不度玉门关"),
    province("青海省", "牛肉干和老酸奶都好好吃"),
    province("宁夏回族自治区", "大漠孤烟直，长河落日圆"),
    province("新疆维吾尔自治区", "驼铃古道丝绸路，胡马犹闻唐汉风"),
    province("台湾省", "我在这头，大陆在那头"),
    municipality("香港特别行政区", "永定贼有残留地鬼嚎，迎击光非岁玉"),
    municipality("澳门特别行政区", "性感荷官，在线发牌"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, greeting)| *greeting)
}

/// Greeting for a country outside China, if it has one.
pub fn country_greeting(country: &str) -> Option<&'static str> {
    lookup(COUNTRIES, country)
}

/// The province table row for `name`, if listed.
pub fn find_province(name: &str) -> Option<&'static ProvinceEntry> {
    PROVINCES.iter().find(|entry| entry.name == name)
}
