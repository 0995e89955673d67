//! Rational coefficients for the SaS point-5 upper tail `P(X > |x|)`.
//!
//! Same octave layout as the density, starting at 0.5; the tail is fitted in
//! `u = x^-1/2` and rescaled by `u`.

use super::rational::{Pade, Segment};

const PADE_0_0P5: Pade = Pade {
    numer: &[
        5.00000000000000000000e-1,
        1.11530082549581486148e2,
        1.18564167533523512811e4,
        7.51503793077701705413e5,
        3.05648233678438482191e7,
        8.12176734530090957088e8,
        1.39533182836234507573e10,
        1.50394359286077974212e11,
        9.79057903542935575811e11,
        3.73800992855150140014e12,
        8.12697090329432868343e12,
        9.63154058643818290870e12,
        5.77714904017642642181e12,
        1.53321958252091815685e12,
        1.36220966258718212359e11,
        1.70766655065405022702e9,
    ],
    denom: &[
        1.00000000000000000000e0,
        2.24333404643898143947e2,
        2.39984636687021023600e4,
        1.53353791432086858132e6,
        6.30764952479861776476e7,
        1.70405769169309597488e9,
        3.00381227010195289341e10,
        3.37519046677507392667e11,
        2.35001610518109063314e12,
        9.90961948200767679416e12,
        2.47066673978544828258e13,
        3.51442593932882610556e13,
        2.68891431106117733130e13,
        9.99723484253582494535e12,
        1.49190229409236772612e12,
        5.68752980146893975323e10,
    ],
};

const PADE_0P5_1: Pade = Pade {
    numer: &[
        3.31309550000758082456e-1,
        1.63012162307622129396e0,
        2.97763161467248770571e0,
        2.49277948739575294031e0,
        9.49619262302649586821e-1,
        1.38360148984087584165e-1,
        4.00812864075652334798e-3,
        -4.82051978765960490940e-5,
    ],
    denom: &[
        1.00000000000000000000e0,
        5.43565383128046471592e0,
        1.13265160672130133152e1,
        1.13352316246726435292e1,
        5.56671465170409694873e0,
        1.21011708389501479550e0,
        8.34618282872428849500e-2,
    ],
};

const PADE_1_2: Pade = Pade {
    numer: &[
        2.71280312689343248819e-1,
        7.44610837974139249205e-1,
        7.17844128359406982825e-1,
        2.98789060945288850507e-1,
        5.22747411439102272576e-2,
        3.06447984437786430265e-3,
        2.60407071021044908690e-5,
    ],
    denom: &[
        1.00000000000000000000e0,
        3.06221257507188300824e0,
        3.44827372231472308047e0,
        1.78166113338930668519e0,
        4.25580478492907232687e-1,
        4.09983847731128510426e-2,
        1.04343172183467651240e-3,
    ],
};

const PADE_2_4: Pade = Pade {
    numer: &[
        2.13928162275383716645e-1,
        2.35139109235828185307e-1,
        9.35967515134932733243e-2,
        1.64310489592753858417e-2,
        1.23186728989215889119e-3,
        3.13500969261032539402e-5,
        1.17021346758965979212e-7,
    ],
    denom: &[
        1.00000000000000000000e0,
        1.28212183177829510267e0,
        6.17321009406850420793e-1,
        1.38400318019319970893e-1,
        1.44994794535896837497e-2,
        6.17774446282546623636e-4,
        7.00521050169239269819e-6,
    ],
};

const PADE_4_8: Pade = Pade {
    numer: &[
        1.63772802979087193656e-1,
        9.69009603942214234119e-2,
        2.08261725719828138744e-2,
        1.97965182693146960970e-3,
        8.05499273532204276894e-5,
        1.11401971145777879684e-6,
        2.25932082770588727842e-9,
    ],
    denom: &[
        1.00000000000000000000e0,
        6.92463563872865541733e-1,
        1.80720987166755982366e-1,
        2.20416647324531054557e-2,
        1.26052070140663063778e-3,
        2.93967534265875431639e-5,
        1.82706995042259549615e-7,
    ],
};

const PADE_8_16: Pade = Pade {
    numer: &[
        1.22610122564874280532e-1,
        3.70273222121572231593e-2,
        4.06083618461789591121e-3,
        1.96898134215932126299e-4,
        4.08421066512186972853e-6,
        2.87707419853226244584e-8,
        2.96850126180387702894e-11,
    ],
    denom: &[
        1.00000000000000000000e0,
        3.55825191301363023576e-1,
        4.77251766176046719729e-2,
        2.99136605131226103925e-3,
        8.78895785432321899939e-5,
        1.05235770624006494709e-6,
        3.35423877769913468556e-9,
    ],
};

const PADE_16_32: Pade = Pade {
    numer: &[
        9.03056141356415077080e-2,
        1.37568904417652631821e-2,
        7.60947271383247418831e-4,
        1.86048302967560067128e-5,
        1.94537860496575427218e-7,
        6.90524093915996283104e-10,
        3.58808434477817122371e-13,
    ],
    denom: &[
        1.00000000000000000000e0,
        1.80501347735272292079e-1,
        1.22807958286146936376e-2,
        3.90421541115275676253e-4,
        5.81669449234915057779e-6,
        3.53005415676201803667e-8,
        5.69883025435873921433e-11,
    ],
};

const PADE_32_64: Pade = Pade {
    numer: &[
        6.57333571766941474226e-2,
        5.02795551798163084224e-3,
        1.39633616037997111325e-4,
        1.71386564634533872559e-6,
        8.99508156357247137439e-9,
        1.60229460572297160486e-11,
        4.17711709622960498456e-15,
    ],
    denom: &[
        1.00000000000000000000e0,
        9.10198637347368265508e-2,
        3.12263472357578263712e-3,
        5.00524795130325614005e-5,
        3.75913188747149725195e-7,
        1.14970132098893394023e-9,
        9.34957119271300093120e-13,
    ],
};

const PADE_LIMIT: Pade = Pade {
    numer: &[
        3.98942280401432677940e-1,
        8.12222388783621449146e-2,
        1.68515703707271703934e-2,
        2.19801627205374824460e-3,
        -5.63321705854968264807e-5,
    ],
    denom: &[
        1.00000000000000000000e0,
        6.02536240902768558315e-1,
        1.99284471400121092380e-1,
        3.48012577961755452113e-2,
        3.38545004473058881799e-3,
    ],
};

/// Body segments of `[0, 64]`, ordered by upper bound.
pub(crate) const BODY: [Segment; 8] = [
    Segment::new(0.5, 0.0, PADE_0_0P5),
    Segment::new(1.0, 0.5, PADE_0P5_1),
    Segment::new(2.0, 1.0, PADE_1_2),
    Segment::new(4.0, 2.0, PADE_2_4),
    Segment::new(8.0, 4.0, PADE_4_8),
    Segment::new(16.0, 8.0, PADE_8_16),
    Segment::new(32.0, 16.0, PADE_16_32),
    Segment::new(64.0, 32.0, PADE_32_64),
];

/// Tail rational in `u = 1/sqrt(x)` for `x > 64`.
pub(crate) const TAIL: Pade = PADE_LIMIT;
