//! Tile labels, fills and snowflake parameters.
//!
//! Labels and fills are indexed by sampling order; use
//! [`CurveLayout::arrange`](crate::layout::CurveLayout::arrange) to put them
//! into visual order.

use crate::constants::{
    SNOWFLAKE_FALL_MIN_SEC, SNOWFLAKE_FALL_SPAN_SEC, SNOWFLAKE_FONT_MIN_PX, SNOWFLAKE_FONT_SPAN_PX,
};
use rand::Rng;

pub const BLESSINGS: [&str; 120] = [
    "愿你冬夜与光同眠",
    "愿你心底常留炭火",
    "愿你拥抱柔软时光",
    "愿你与好运撞个满怀",
    "愿你所念皆所愿",
    "愿你此刻自在闪耀",
    "愿你平安顺遂",
    "愿你保有赤子心",
    "愿你笑容永远灿烂",
    "愿你被世界温柔以待",
    "愿你与热爱长相伴",
    "愿你沉浸在甜蜜里",
    "愿你所有坚持都有回应",
    "愿你不惧风雪",
    "愿你眼中有星光",
    "愿你身旁有知己",
    "愿你如愿以偿",
    "愿你每天都闪闪发光",
    "愿你一路花开",
    "愿你心事都被照亮",
    "愿你步履不停，终见繁花",
    "愿你历经山河，觉得人间值得",
    "愿你日子清净，抬头所见皆温柔",
    "愿你三冬暖，春不寒",
    "愿你天黑有灯，下雨有伞",
    "愿你一生被爱，勇敢自由",
    "愿你所得皆所愿，所行皆坦途",
    "愿你眼里有光，脚下有路",
    "愿你走出半生，归来仍是少年",
    "愿你付出甘之如饴，所得归于欢喜",
    "愿你有盔甲，也有软肋",
    "愿你有梦可追，有肩可依",
    "愿你遍历人间，依然觉得生活可爱",
    "愿你不慌不忙，向阳生长",
    "愿你想要的都拥有，得不到的都释怀",
    "愿你平安喜乐，万事胜意",
    "愿你被生活温柔包裹，内心澄澈向暖",
    "愿你如星辰，明亮不耀眼",
    "愿你每个清晨都有新期待",
    "愿你每个黄昏都有好回忆",
    "愿你在鸡零狗碎里，找到闪闪的快乐",
    "愿你对生活永远热忱，对未来永远憧憬",
    "愿你拥有发现美的眼睛，捕捉暖的心灵",
    "愿你前路漫漫，亦有可期",
    "愿你穿过风雨，仍能拥抱彩虹",
    "愿你珍惜当下，不负时光",
    "愿你心有丘壑，眼存山河",
    "愿你简单纯粹，自在随心",
    "愿你被岁月温柔以待，不负韶华",
    "愿你每个选择都坚定，每条路都值得",
    "愿你把日子过成诗，浓淡皆宜",
    "愿你有能力爱自己，有余力爱别人",
    "愿你风雨中像个大人，阳光下像个孩子",
    "愿你抬头遇晴空，低头拾美好",
    "愿你一生努力，一生被爱",
    "愿你平凡生活里，藏着生生不息的希望",
    "愿你所有等待，都不被辜负",
    "愿你所有美好，都如期而至",
    "愿你心中有丘壑，立马振山河",
    "愿你笑对生活，生活也笑对你",
    "愿你历经千帆，归来仍是少年模样",
    "愿你在薄情世界里，深情地活",
    "愿你有说走就走的勇气，也有安稳停留的底气",
    "愿你每个平凡的日子，都闪着不平凡的光",
    "愿你所到之处，遍地阳光",
    "愿你所行之路，皆遇坦途",
    "愿你被这个世界温柔呵护，少些波澜",
    "愿你保持热爱，奔赴下一场山海",
    "愿你夜有好眠，昼有清欢",
    "愿你日子有滋有味，生活有声有色",
    "愿你不为往事忧，只为余生笑",
    "愿你目光所及，皆是美好",
    "愿你触手所及，皆是温暖",
    "愿你在自己的节奏里，活得从容",
    "愿你有足够的运气和勇气，遇见所有美好",
    "愿你耕耘当下，收获未来",
    "愿你心怀暖阳，不惧岁月寒凉",
    "愿你把平凡的日子，过出自己的精彩",
    "愿你有远方可奔赴，有过往可回头",
    "愿你每次流泪，都是喜极而泣",
    "愿你每次出发，都能平安抵达",
    "愿你在喧嚣世界里，守得住内心的宁静",
    "愿你有随时可以打扰的朋友，有永远牵挂的家人",
    "愿你春赏百花秋望月，夏听蝉鸣冬观雪",
    "愿你日子缓缓，余生漫漫，皆得所愿",
    "愿你付出的每一份努力，都有双倍的回报",
    "愿你在无人问津的日子里，也能独自绽放",
    "愿你走过的弯路，都成为风景",
    "愿你遇到的坎坷，都变成垫脚石",
    "愿你心向阳光，何惧风霜",
    "愿你温柔且坚定，知足且上进",
    "愿你有能力拒绝所有不想要，有运气拥有所有想要的",
    "愿你把生活嚼得有滋有味，把日子过得活色生香",
    "愿你抬头可见月亮，低头可捡六便士",
    "愿你被生活偏爱，好运常伴左右",
    "愿你历经世事，依然保持善良与纯粹",
    "愿你在疲惫生活中，总有温柔梦想",
    "愿你每个今天，都比昨天更懂生活",
    "愿你有勇气改变能改变的，有胸怀接受不能改变的",
    "愿你眼中总有光芒，活成自己喜欢的模样",
    "愿你三餐四季，温暖有趣",
    "愿你岁岁常欢愉，年年皆胜意",
    "愿你前路浩浩荡荡，万事皆可期待",
    "愿你在薄情的世界里，深情地活成自己",
    "愿你有盔甲抵御风浪，有软肋感知温柔",
    "愿你遍历山河，觉得人间值得",
    "愿你不辜负时光，不辜负自己",
    "愿你在平凡的岗位上，做出不平凡的成绩",
    "愿你有梦为马，随处可栖",
    "愿你被很多人爱，如果没有，愿你在寂寞中学会宽容",
    "愿你平安无疾，前程似锦",
    "愿你天黑有灯，下雨有伞，路上有良人相伴",
    "愿你眼中有星河，心中藏月光",
    "愿你每天都有小确幸，累积成大幸福",
    "愿你不为难自己，不辜负岁月",
    "愿你活得通透，笑得坦荡",
    "愿你所得过少时，不会终日愤愤",
    "愿你所得过多时，不会终日惶恐",
    "愿你有前进一寸的勇气，亦有后退一尺的从容",
    "愿你一生清澈明朗，所求遂所愿",
];

/// Tile backgrounds, applied cyclically.
pub const TILE_FILLS: [&str; 10] = [
    "linear-gradient(145deg, rgba(116, 225, 255, 0.95), rgba(137, 173, 255, 0.95))",
    "linear-gradient(145deg, rgba(181, 140, 255, 0.95), rgba(255, 170, 220, 0.95))",
    "linear-gradient(145deg, rgba(116, 255, 214, 0.95), rgba(144, 169, 255, 0.95))",
    "linear-gradient(145deg, rgba(255, 211, 173, 0.95), rgba(183, 153, 255, 0.95))",
    "linear-gradient(145deg, rgba(158, 255, 236, 0.95), rgba(227, 144, 255, 0.95))",
    "linear-gradient(145deg, rgba(126, 168, 255, 0.95), rgba(255, 176, 205, 0.95))",
    "linear-gradient(145deg, rgba(143, 255, 213, 0.95), rgba(255, 198, 255, 0.95))",
    "linear-gradient(145deg, rgba(114, 193, 255, 0.95), rgba(200, 139, 255, 0.95))",
    "linear-gradient(145deg, rgba(126, 255, 194, 0.95), rgba(130, 148, 255, 0.95))",
    "linear-gradient(145deg, rgba(255, 221, 178, 0.95), rgba(158, 125, 255, 0.95))",
];

#[inline]
pub fn blessing_for(index: usize) -> &'static str {
    BLESSINGS[index % BLESSINGS.len()]
}

#[inline]
pub fn tile_fill_for(index: usize) -> &'static str {
    TILE_FILLS[index % TILE_FILLS.len()]
}

pub fn blessings(count: usize) -> Vec<&'static str> {
    (0..count).map(blessing_for).collect()
}

pub fn tile_fills(count: usize) -> Vec<&'static str> {
    (0..count).map(tile_fill_for).collect()
}

/// Randomized appearance of one falling snowflake.
///
/// - `left_vw`: horizontal start as a percentage of viewport width
/// - `fall_sec`: CSS animation duration
/// - `font_px`: glyph size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowflakeSpec {
    pub left_vw: f64,
    pub fall_sec: f64,
    pub font_px: f64,
}

impl SnowflakeSpec {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.gen::<f64>() * 100.0,
            fall_sec: SNOWFLAKE_FALL_MIN_SEC + rng.gen::<f64>() * SNOWFLAKE_FALL_SPAN_SEC,
            font_px: SNOWFLAKE_FONT_MIN_PX + rng.gen::<f64>() * SNOWFLAKE_FONT_SPAN_PX,
        }
    }
}

/// Flakes of one snowfall burst still on the page.
///
/// The web layer removes the burst's container once the last flake is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnowBurst {
    remaining: u32,
}

impl SnowBurst {
    pub const fn new(flakes: u32) -> Self {
        Self { remaining: flakes }
    }

    pub fn remaining(self) -> u32 {
        self.remaining
    }

    pub fn is_finished(self) -> bool {
        self.remaining == 0
    }

    /// Record one flake leaving the page. Returns `true` only for the last one.
    pub fn flake_done(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}
