//! Casebook - the static pool of authored offline cases.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use rand::Rng;

use crate::domain::case::{Case, Difficulty, OfflineResponse, Suspect};
use crate::domain::foundation::SuspectId;
use crate::ports::{CaseGenerator, ServiceError};

/// Static pool of pre-authored cases, used when no live generation
/// capability is available or a live call fails.
///
/// Selection filters the pool by the requested difficulty; if no case
/// matches, the whole pool is eligible. The pick is uniform at random.
#[derive(Debug, Clone)]
pub struct Casebook {
    cases: Vec<Case>,
}

impl Casebook {
    /// Creates a casebook over the built-in authored cases.
    pub fn builtin() -> Self {
        Self {
            cases: BUILTIN_CASES.clone(),
        }
    }

    /// Creates a casebook over a custom pool.
    ///
    /// An empty pool is allowed here but every pick will fail.
    pub fn new(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    /// Returns the number of cases in the pool.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Picks a case for the requested difficulty.
    ///
    /// # Errors
    ///
    /// - `EmptyCasePool` if the pool has no cases at all
    pub fn pick(&self, difficulty: Difficulty) -> Result<Case, ServiceError> {
        if self.cases.is_empty() {
            return Err(ServiceError::EmptyCasePool);
        }

        let matching: Vec<&Case> = self
            .cases
            .iter()
            .filter(|c| c.difficulty() == difficulty)
            .collect();
        let pool: Vec<&Case> = if matching.is_empty() {
            self.cases.iter().collect()
        } else {
            matching
        };

        let index = rand::thread_rng().gen_range(0..pool.len());
        Ok(pool[index].clone())
    }
}

impl Default for Casebook {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl CaseGenerator for Casebook {
    async fn generate(&self, difficulty: Difficulty) -> Result<Case, ServiceError> {
        self.pick(difficulty)
    }
}

static BUILTIN_CASES: Lazy<Vec<Case>> = Lazy::new(|| vec![mansion_case(), train_case()]);

fn suspect_id(id: &str) -> SuspectId {
    SuspectId::new(id).expect("authored suspect id")
}

/// 《豪门惊梦》 - the mansion blackout case.
fn mansion_case() -> Case {
    let butler = Suspect::new(
        suspect_id("s1"),
        "张管家",
        "管家",
        "在李家服务了30年，忠心耿耿，最近却因为儿子赌博欠债而焦头烂额。",
        "butler",
        "案发当晚趁停电偷了老爷抽屉里的一块金表去还债，但绝没有杀人。",
        "沉稳，唯唯诺诺，眼神闪烁，非常维护李家名声。",
    )
    .with_image_url("https://img.freepik.com/free-photo/portrait-senior-man-wearing-suit_23-2148943825.jpg?auto=format&fit=crop&w=500&q=80")
    .with_offline_responses(vec![
        OfflineResponse::new(
            ["哪里", "在哪", "位置"],
            "当时停电了，我在一楼检查备用发电机，那里黑漆漆的，我花了好久时间。",
        ),
        OfflineResponse::new(
            ["关系", "争吵", "矛盾"],
            "老爷对我有恩，我怎么会和他争吵？我一直把他当亲人看待。",
        ),
        OfflineResponse::new(["钱", "赌", "债"], "这……这是我的私事。但这和老爷的死无关！"),
        OfflineResponse::new(["最后", "见"], "晚饭后给老爷送了一杯热牛奶，那是9点左右。"),
    ]);

    let daughter = Suspect::new(
        suspect_id("s2"),
        "李大小姐",
        "女儿",
        "刚从国外留学回来，和父亲因为遗产继承权和母亲改嫁的问题多次发生激烈争吵。",
        "lady",
        "其实在10点停电前就进入书房杀害了父亲，并取出了电子钟的电池，制造了时间假象。",
        "高傲，情绪激动，容易流泪，看不起下人。",
    )
    .with_image_url("https://img.freepik.com/free-photo/portrait-young-woman-with-long-hair_23-2148943809.jpg?auto=format&fit=crop&w=500&q=80")
    .with_offline_responses(vec![
        OfflineResponse::new(
            ["哪里", "在哪"],
            "我在自己房间里哭！那个老顽固要把家产捐给慈善机构，我气都气饱了。",
        ),
        OfflineResponse::new(
            ["争吵", "矛盾"],
            "是，我是恨他，他逼走了妈妈，现在又不认我这个女儿。但这不代表我会杀他！",
        ),
        OfflineResponse::new(["10点", "停电"], "停电的时候我吓坏了，一直躲在被子里。"),
        OfflineResponse::new(["书房", "进去"], "我没有去过书房！我甚至不想见到他！"),
    ]);

    let driver = Suspect::new(
        suspect_id("s3"),
        "王司机",
        "司机",
        "年轻英俊的司机，不仅是司机，还是大小姐的秘密情人。案发当晚行踪诡秘。",
        "driver",
        "案发当晚在后花园等大小姐私会，看见大小姐慌张地从书房窗户跑出来，但选择了包庇。",
        "轻浮，看似不在乎，实则警惕，非常保护大小姐。",
    )
    .with_image_url("https://img.freepik.com/free-photo/portrait-handsome-man-black-shirt_23-2148943799.jpg?auto=format&fit=crop&w=500&q=80")
    .with_offline_responses(vec![
        OfflineResponse::new(["哪里", "在哪"], "我在车里睡觉啊，下那么大雨，我也没地方去。"),
        OfflineResponse::new(
            ["关系", "大小姐"],
            "我只是个司机，和雇主能有什么关系？警官你可别乱说。",
        ),
        OfflineResponse::new(["书房", "看见"], "我什么都没看见。雨太大了，视线模糊。"),
        OfflineResponse::new(["秘密"], "每个人都有秘密，但这不犯法吧？"),
    ]);

    Case::new(
        "豪门惊梦",
        "大雨滂沱的夜晚，富豪李老爷死在自家书房。昨晚10:00因暴雨导致变压器故障，整栋别墅陷入停电状态，直到今早才恢复。书房内有一个昂贵的电子万年历挂钟，显示的时间永远停在了案发当晚10:05。李老爷头部受到钝器重击，现场没有打斗痕迹。",
        "李大小姐",
        Difficulty::Medium,
        vec![butler, daughter, driver],
    )
    .expect("authored case")
}

/// 《列车迷影》 - the locked-compartment train case.
fn train_case() -> Case {
    let magician = Suspect::new(
        suspect_id("t1"),
        "赵魔术师",
        "乘客",
        "著名的魔术师，擅长逃脱术和密室机关。据说由于欠下巨额高利贷，急需珠宝商手中的那颗蓝宝石。",
        "magician",
        "利用钓鱼线和特殊的机关在门外完成了反锁，偷走了宝石并杀人灭口。",
        "自信，夸夸其谈，喜欢用反问句。",
    )
    .with_image_url("https://img.freepik.com/free-photo/magician-holding-playing-cards_23-2149455348.jpg?w=500")
    .with_offline_responses(vec![
        OfflineResponse::new(
            ["哪里", "在哪"],
            "我在餐车为几位美丽的女士表演纸牌魔术，很多人可以作证。",
        ),
        OfflineResponse::new(
            ["锁", "密室"],
            "密室？哈哈，这世界上没有真正的密室，只有被蒙蔽的双眼。",
        ),
        OfflineResponse::new(
            ["宝石", "钱"],
            "艺术是无价的，而我，是创造艺术的人。钱对我来说只是数字。",
        ),
    ]);

    let doctor = Suspect::new(
        suspect_id("t2"),
        "孙医生",
        "乘客",
        "死者的私人医生，随身携带大量药物。最近死者似乎打算解雇他。",
        "doctor",
        "给死者开的药里有安眠成分，方便了凶手作案，但他并没有杀人。",
        "紧张，神经质，不停地擦眼镜。",
    )
    .with_image_url("https://img.freepik.com/free-photo/doctor-with-stethoscope-hands-hospital-background_1423-1.jpg?w=500")
    .with_offline_responses(vec![
        OfflineResponse::new(["哪里", "在哪"], "我在自己的铺位上看书，这趟旅程太漫长了。"),
        OfflineResponse::new(["药", "解雇"], "那是为了他的健康！他心脏不好，离不开我。"),
    ]);

    let journalist = Suspect::new(
        suspect_id("t3"),
        "周记者",
        "乘客",
        "一直跟踪报道珠宝商丑闻的记者，为了新闻不择手段。",
        "journalist",
        "案发时在通风管道偷拍，拍到了魔术师从包厢出来的模糊背影，想以此勒索。",
        "犀利，好奇，手里总是拿着相机。",
    )
    .with_image_url("https://img.freepik.com/free-photo/photographer-taking-pictures_23-2148118029.jpg?w=500")
    .with_offline_responses(vec![
        OfflineResponse::new(
            ["哪里", "在哪"],
            "我在到处转转，寻找新闻素材。这列车上每个人都很可疑，不是吗？",
        ),
        OfflineResponse::new(["照片", "相机"], "无可奉告。这是我的职业机密。"),
    ]);

    Case::new(
        "列车迷影",
        "在一列行驶的豪华列车上，一名著名的珠宝商被发现死在自己的包厢里。包厢门是从里面反锁的，窗户也是锁住的。唯一的钥匙在列车长手里，但他有明确的不在场证明。",
        "魔术师",
        Difficulty::Easy,
        vec![magician, doctor, journalist],
    )
    .expect("authored case")
}
