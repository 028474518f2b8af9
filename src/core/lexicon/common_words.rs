//! Compiled-in common words with their glosses
//!
//! Every entry is vetted as safe. Glosses follow the Youdao suggest format
//! the gloss service returns, so the abbreviation screen applies to both.

pub const COMMON_WORDS: &[(&str, &str)] = &[
    // Single letters and two-letter words
    ("A", "art. 一（个）；任一"),
    ("I", "pron. 我"),
    ("AM", "v. 是（be 的第一人称单数现在式）"),
    ("AN", "art. 一（个）"),
    ("AS", "adv. 同样地 conj. 当…时；因为"),
    ("AT", "prep. 在；向"),
    ("BE", "v. 是；存在"),
    ("BY", "prep. 通过；被；在…旁边"),
    ("DO", "v. 做；干"),
    ("GO", "v. 去；走 n. 围棋"),
    ("HE", "pron. 他"),
    ("HI", "int. 嗨；你好"),
    ("IF", "conj. 如果；是否"),
    ("IN", "prep. 在…里 adv. 在内"),
    ("IS", "v. 是（be 的第三人称单数现在式）"),
    ("IT", "pron. 它"),
    ("ME", "pron. 我（宾格）"),
    ("MY", "pron. 我的"),
    ("NO", "adv. 不 adj. 没有"),
    ("OF", "prep. …的；属于"),
    ("OK", "adj. 好的 adv. 可以；行"),
    ("ON", "prep. 在…上 adv. 开着"),
    ("OR", "conj. 或者；否则"),
    ("SO", "adv. 如此；这么 conj. 所以"),
    ("TO", "prep. 向；到"),
    ("TV", "abbr. 电视（television）"),
    ("UP", "adv. 向上 prep. 在…上面"),
    ("US", "pron. 我们（宾格）"),
    ("WE", "pron. 我们"),
    // Three letters
    ("ACE", "n. 王牌；高手 adj. 一流的"),
    ("ACT", "n. 行为；法令 v. 行动；表演"),
    ("AGE", "n. 年龄；时代"),
    ("AIR", "n. 空气；天空"),
    ("ALE", "n. 麦芽酒"),
    ("ANT", "n. 蚂蚁"),
    ("APE", "n. 猿 v. 模仿"),
    ("ARC", "n. 弧；弧线"),
    ("ARE", "v. 是（be 的复数现在式）"),
    ("ARM", "n. 手臂"),
    ("ART", "n. 艺术；美术"),
    ("ATE", "v. 吃（eat 的过去式）"),
    ("BAG", "n. 包；袋子"),
    ("BED", "n. 床"),
    ("BOX", "n. 盒子；箱子"),
    ("CAN", "v. 能够 n. 罐头"),
    ("CAP", "n. 帽子；盖子"),
    ("CAR", "n. 汽车"),
    ("CAT", "n. 猫"),
    ("COT", "n. 简易床"),
    ("CUP", "n. 杯子"),
    ("DOG", "n. 狗"),
    ("DOT", "n. 点；小圆点"),
    ("EAR", "n. 耳朵"),
    ("EAT", "v. 吃"),
    ("EGG", "n. 蛋；鸡蛋"),
    ("END", "n. 结束；末端 v. 结束"),
    ("ERA", "n. 时代；纪元"),
    ("FAN", "n. 风扇；狂热爱好者"),
    ("HAT", "n. 帽子"),
    ("LAP", "n. 膝部；一圈"),
    ("LET", "v. 让；允许"),
    ("MAP", "n. 地图"),
    ("NAP", "n. 小睡 v. 打盹"),
    ("NET", "n. 网 adj. 净的"),
    ("NOT", "adv. 不；没有"),
    ("OAR", "n. 桨"),
    ("ONE", "num. 一 pron. 一个人"),
    ("PAL", "n. 朋友；伙伴"),
    ("PAN", "n. 平底锅"),
    ("PAT", "v. 轻拍"),
    ("PEA", "n. 豌豆"),
    ("PEN", "n. 钢笔"),
    ("PET", "n. 宠物"),
    ("RAT", "n. 老鼠"),
    ("RED", "adj. 红色的 n. 红色"),
    ("SAT", "v. 坐（sit 的过去式）"),
    ("SEA", "n. 海；海洋"),
    ("SET", "v. 放置；设定 n. 一套"),
    ("SPA", "n. 温泉；水疗"),
    ("SUN", "n. 太阳"),
    ("TAN", "n. 棕褐色 v. 晒黑"),
    ("TAP", "n. 水龙头 v. 轻敲"),
    ("TAR", "n. 焦油；柏油"),
    ("TEA", "n. 茶"),
    ("TEN", "num. 十"),
    ("TOE", "n. 脚趾"),
    ("TOP", "n. 顶部 adj. 最高的"),
    ("TOY", "n. 玩具"),
    // Four letters
    ("ALSO", "adv. 也；而且"),
    ("ANTS", "n. 蚂蚁（ant 的复数）"),
    ("AREA", "n. 地区；面积"),
    ("BIRD", "n. 鸟"),
    ("BOAT", "n. 小船"),
    ("BOOK", "n. 书 v. 预订"),
    ("CARE", "n. 照顾；关心 v. 在乎"),
    ("CART", "n. 手推车"),
    ("CASE", "n. 情况；案例；箱子"),
    ("CAST", "v. 投掷；铸造 n. 演员表"),
    ("CATS", "n. 猫（cat 的复数）"),
    ("COAT", "n. 外套"),
    ("COOL", "adj. 凉爽的；酷的"),
    ("DARE", "v. 敢；挑战"),
    ("DEAR", "adj. 亲爱的"),
    ("EAST", "n. 东方 adj. 东方的"),
    ("EATS", "v. 吃（eat 的第三人称单数）"),
    ("FISH", "n. 鱼 v. 钓鱼"),
    ("GAME", "n. 游戏；比赛"),
    ("HOME", "n. 家 adv. 在家"),
    ("LACE", "n. 花边；鞋带"),
    ("LANE", "n. 小路；车道"),
    ("LAST", "adj. 最后的 v. 持续"),
    ("LATE", "adj. 迟的 adv. 晚"),
    ("LEAN", "v. 倾斜；依靠 adj. 瘦的"),
    ("LEAP", "v. 跳跃 n. 飞跃"),
    ("LENS", "n. 透镜；镜头"),
    ("LOOK", "v. 看 n. 外表"),
    ("MAST", "n. 桅杆"),
    ("NAPS", "n. 小睡（nap 的复数）"),
    ("NEAT", "adj. 整洁的"),
    ("NEST", "n. 巢；窝"),
    ("NETS", "n. 网（net 的复数）"),
    ("NOTE", "n. 笔记；音符 v. 注意"),
    ("PACE", "n. 步速；节奏"),
    ("PALE", "adj. 苍白的"),
    ("PANE", "n. 窗格玻璃"),
    ("PANT", "v. 喘气"),
    ("PARE", "v. 削皮；削减"),
    ("PART", "n. 部分 v. 分开"),
    ("PAST", "adj. 过去的 n. 过去"),
    ("PEAL", "n. 钟声 v. 鸣响"),
    ("PEAR", "n. 梨"),
    ("PEAT", "n. 泥炭"),
    ("PENS", "n. 钢笔（pen 的复数）"),
    ("PEST", "n. 害虫；讨厌的人"),
    ("PETS", "n. 宠物（pet 的复数）"),
    ("PLAN", "n. 计划 v. 打算"),
    ("PLEA", "n. 恳求；抗辩"),
    ("POOL", "n. 水池；游泳池"),
    ("RACE", "n. 赛跑；种族 v. 比赛"),
    ("RATE", "n. 比率；速度 v. 评估"),
    ("REST", "n. 休息；剩余部分 v. 休息"),
    ("ROAD", "n. 道路"),
    ("SALE", "n. 销售；出售"),
    ("SALT", "n. 盐"),
    ("SANE", "adj. 神志正常的"),
    ("SEAL", "n. 海豹；印章 v. 密封"),
    ("SEAT", "n. 座位"),
    ("SENT", "v. 发送（send 的过去式）"),
    ("SLAP", "v. 拍；掴"),
    ("SLAT", "n. 板条"),
    ("SNAP", "v. 折断；拍快照"),
    ("SPAN", "n. 跨度；一段时间"),
    ("STAR", "n. 星星；明星"),
    ("STEP", "n. 步骤；台阶 v. 迈步"),
    ("STOP", "v. 停止 n. 车站"),
    ("TALE", "n. 故事；传说"),
    ("TAPE", "n. 胶带；磁带"),
    ("TEAL", "n. 水鸭；蓝绿色"),
    ("TEAR", "n. 眼泪 v. 撕开"),
    ("TENS", "n. 十（ten 的复数）"),
    ("TENT", "n. 帐篷"),
    ("TRAP", "n. 陷阱 v. 困住"),
    ("TREE", "n. 树"),
    ("WORD", "n. 单词；话语"),
    // Five letters and longer
    ("ANGEL", "n. 天使"),
    ("ANGER", "n. 愤怒 v. 激怒"),
    ("ASPEN", "n. 白杨"),
    ("BEACH", "n. 海滩"),
    ("BREAD", "n. 面包"),
    ("CARET", "n. 脱字符号"),
    ("CATER", "v. 提供饮食；迎合"),
    ("CHAIR", "n. 椅子"),
    ("CLEAN", "adj. 干净的 v. 打扫"),
    ("CLOUD", "n. 云"),
    ("CRATE", "n. 板条箱"),
    ("DANCE", "n. 舞蹈 v. 跳舞"),
    ("DANGER", "n. 危险"),
    ("EARTH", "n. 地球；泥土"),
    ("ENTER", "v. 进入；输入"),
    ("GARDEN", "n. 花园"),
    ("GRAND", "adj. 宏伟的；重大的"),
    ("HEART", "n. 心脏；内心"),
    ("HOUSE", "n. 房子"),
    ("LAPSE", "n. 失误；流逝 v. 失效"),
    ("LEANT", "v. 倾斜（lean 的过去式）"),
    ("LEAPT", "v. 跳跃（leap 的过去式）"),
    ("LEAST", "adj. 最少的 adv. 最少"),
    ("LIGHT", "n. 光 adj. 轻的"),
    ("MUSIC", "n. 音乐"),
    ("NAPES", "n. 后颈（nape 的复数）"),
    ("OCEAN", "n. 海洋"),
    ("PANEL", "n. 面板；专门小组"),
    ("PANES", "n. 窗格玻璃（pane 的复数）"),
    ("PANTS", "n. 裤子"),
    ("PASTE", "n. 糨糊；面团 v. 粘贴"),
    ("PEACE", "n. 和平；平静"),
    ("PETAL", "n. 花瓣"),
    ("PLACE", "n. 地方 v. 放置"),
    ("PLANE", "n. 飞机；平面"),
    ("PLANS", "n. 计划（plan 的复数）"),
    ("PLANT", "n. 植物；工厂 v. 种植"),
    ("PLATE", "n. 盘子；板"),
    ("PLEAT", "n. 褶 v. 打褶"),
    ("REACT", "v. 反应；回应"),
    ("RIVER", "n. 河流"),
    ("SLANT", "n. 倾斜 v. 倾斜"),
    ("SLATE", "n. 石板；板岩"),
    ("SLEPT", "v. 睡觉（sleep 的过去式）"),
    ("SNEAK", "v. 偷偷地走"),
    ("SPELT", "v. 拼写（spell 的过去式） n. 斯佩耳特小麦"),
    ("SPENT", "v. 花费（spend 的过去式） adj. 用尽的"),
    ("STALE", "adj. 陈腐的；不新鲜的"),
    ("STEAL", "v. 偷"),
    ("STONE", "n. 石头"),
    ("TABLE", "n. 桌子；表格"),
    ("TAPES", "n. 胶带（tape 的复数）"),
    ("TRACE", "n. 痕迹 v. 追踪"),
    ("WATER", "n. 水 v. 浇水"),
    ("ANSWER", "n. 答案 v. 回答"),
    ("CASTLE", "n. 城堡"),
    ("LETTER", "n. 信；字母"),
    ("PASTEL", "n. 粉蜡笔；柔和的色彩 adj. 淡色的"),
    ("PLANET", "n. 行星"),
    ("PLANES", "n. 飞机（plane 的复数）"),
    ("PLANTS", "n. 植物（plant 的复数）"),
    ("PLATES", "n. 盘子（plate 的复数）"),
    ("PLEATS", "n. 褶（pleat 的复数）"),
    ("SCHOOL", "n. 学校"),
    ("STAPLE", "n. 订书钉；主要产品 adj. 主要的"),
    ("PLANETS", "n. 行星（planet 的复数）"),
];
